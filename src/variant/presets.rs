//! Builtin variant surfaces for the stock components.

use crate::{
    foundation::error::MotifResult,
    props,
    variant::{builder::VariantBuilder, props::keys, schema::VariantSchema},
};

/// Button: `variant` x `size`.
pub fn button() -> MotifResult<VariantSchema> {
    VariantBuilder::new()
        .vocabulary(keys::ALL.iter().copied())
        .with_base(props! { keys::BORDER_RADIUS => 8, keys::FONT_WEIGHT => 500 })
        .add_axis(
            "variant",
            [
                (
                    "default",
                    props! {
                        keys::BG_COLOR => "primary.DEFAULT",
                        keys::FG_COLOR => "primary.foreground",
                    },
                ),
                (
                    "secondary",
                    props! {
                        keys::BG_COLOR => "secondary.DEFAULT",
                        keys::FG_COLOR => "secondary.foreground",
                    },
                ),
                (
                    "outline",
                    props! {
                        keys::BG_COLOR => "transparent",
                        keys::FG_COLOR => "primary.DEFAULT",
                        keys::BORDER_WIDTH => 1,
                    },
                ),
                (
                    "ghost",
                    props! {
                        keys::BG_COLOR => "transparent",
                        keys::FG_COLOR => "foreground.DEFAULT",
                        keys::BORDER_WIDTH => 0,
                    },
                ),
                (
                    "destructive",
                    props! {
                        keys::BG_COLOR => "destructive.DEFAULT",
                        keys::FG_COLOR => "destructive.foreground",
                    },
                ),
            ],
        )
        .add_axis(
            "size",
            [
                ("sm", props! { keys::PADDING => 0.2, keys::FONT_SIZE => 12, keys::HEIGHT => 0.6 }),
                ("md", props! { keys::PADDING => 0.3, keys::FONT_SIZE => 14, keys::HEIGHT => 0.8 }),
                ("lg", props! { keys::PADDING => 0.4, keys::FONT_SIZE => 16, keys::HEIGHT => 1.0 }),
            ],
        )
        .set_defaults([("variant", "default"), ("size", "md")])
        .build()
}

/// Card: `variant` x `padding`.
pub fn card() -> MotifResult<VariantSchema> {
    VariantBuilder::new()
        .vocabulary(keys::ALL.iter().copied())
        .with_base(props! { keys::BORDER_RADIUS => 12 })
        .add_axis(
            "variant",
            [
                (
                    "default",
                    props! {
                        keys::BG_COLOR => "card.DEFAULT",
                        keys::FG_COLOR => "card.foreground",
                        keys::BORDER_WIDTH => 0,
                    },
                ),
                (
                    "outlined",
                    props! {
                        keys::BG_COLOR => "card.DEFAULT",
                        keys::FG_COLOR => "card.foreground",
                        keys::BORDER_WIDTH => 1,
                        keys::BORDER_COLOR => "border.DEFAULT",
                    },
                ),
                (
                    "elevated",
                    props! {
                        keys::BG_COLOR => "card.DEFAULT",
                        keys::FG_COLOR => "card.foreground",
                        keys::SHADOW => true,
                    },
                ),
                (
                    "ghost",
                    props! {
                        keys::BG_COLOR => "transparent",
                        keys::FG_COLOR => "foreground.DEFAULT",
                        keys::BORDER_WIDTH => 0,
                    },
                ),
            ],
        )
        .add_axis(
            "padding",
            [
                ("none", props! { keys::PADDING => 0 }),
                ("sm", props! { keys::PADDING => 0.25 }),
                ("md", props! { keys::PADDING => 0.5 }),
                ("lg", props! { keys::PADDING => 0.75 }),
                ("xl", props! { keys::PADDING => 1.0 }),
            ],
        )
        .set_defaults([("variant", "default"), ("padding", "md")])
        .build()
}

/// Badge: `variant` only.
pub fn badge() -> MotifResult<VariantSchema> {
    VariantBuilder::new()
        .vocabulary(keys::ALL.iter().copied())
        .with_base(props! {
            keys::BORDER_RADIUS => 4,
            keys::FONT_SIZE => 10,
            keys::FONT_WEIGHT => 600,
            keys::PADDING => 0.15,
        })
        .add_axis(
            "variant",
            [
                (
                    "default",
                    props! {
                        keys::BG_COLOR => "primary.DEFAULT",
                        keys::FG_COLOR => "primary.foreground",
                    },
                ),
                (
                    "secondary",
                    props! {
                        keys::BG_COLOR => "secondary.DEFAULT",
                        keys::FG_COLOR => "secondary.foreground",
                    },
                ),
                (
                    "success",
                    props! {
                        keys::BG_COLOR => "success.DEFAULT",
                        keys::FG_COLOR => "success.foreground",
                    },
                ),
                (
                    "warning",
                    props! {
                        keys::BG_COLOR => "warning.DEFAULT",
                        keys::FG_COLOR => "warning.foreground",
                    },
                ),
                (
                    "destructive",
                    props! {
                        keys::BG_COLOR => "destructive.DEFAULT",
                        keys::FG_COLOR => "destructive.foreground",
                    },
                ),
                (
                    "outline",
                    props! {
                        keys::BG_COLOR => "transparent",
                        keys::FG_COLOR => "foreground.DEFAULT",
                        keys::BORDER_WIDTH => 1,
                    },
                ),
            ],
        )
        .set_default("variant", "default")
        .build()
}
