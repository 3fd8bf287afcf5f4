//! Tests for `Color` formatting and parsing.

use crate::{Color, ColorError};

/// Palette shared by the formatting and parsing tests.
const PALETTE: &[(&str, u32, &str)] = &[
    ("black", 0, "#000000"),
    ("white", 16_777_215, "#FFFFFF"),
    ("green", 3_066_993, "#2ECC71"),
    ("blue", 3_447_003, "#3498DB"),
    ("dark purple", 7_419_530, "#71368A"),
    ("orange", 15_105_570, "#E67E22"),
    ("red", 15_158_332, "#E74C3C"),
    ("grey", 9_807_270, "#95A5A6"),
    ("yellow", 16_776_960, "#FFFF00"),
];

mod format {
    use super::*;

    #[test]
    fn renders_palette_as_uppercase_hex() {
        for (name, value, expected) in PALETTE {
            assert_eq!(Color::new(*value).to_string(), *expected, "{name}");
        }
    }

    #[test]
    fn zero_pads_small_values() {
        assert_eq!(Color::new(0).to_string(), "#000000");
        assert_eq!(Color::new(0xF).to_string(), "#00000F");
    }

    #[test]
    fn max_value_is_white() {
        assert_eq!(Color::new(Color::MAX).to_string(), "#FFFFFF");
        assert_eq!(Color::new(Color::MAX), Color::WHITE);
    }

    #[test]
    fn named_constants_match_palette() {
        assert_eq!(Color::GREEN.value(), 3_066_993);
        assert_eq!(Color::BLUE.value(), 3_447_003);
        assert_eq!(Color::DARK_PURPLE.value(), 7_419_530);
        assert_eq!(Color::ORANGE.value(), 15_105_570);
        assert_eq!(Color::RED.value(), 15_158_332);
        assert_eq!(Color::GREY.value(), 9_807_270);
        assert_eq!(Color::YELLOW.value(), 16_776_960);
    }
}

mod parse {
    use super::*;

    #[test]
    fn accepts_with_and_without_hash() {
        assert_eq!(Color::parse("#000000"), Ok(Color::BLACK));
        assert_eq!(Color::parse("FFFFFF"), Ok(Color::WHITE));
    }

    #[test]
    fn is_case_insensitive() {
        assert_eq!(Color::parse("#2ecc71"), Ok(Color::GREEN));
        assert_eq!(Color::parse("3498db"), Ok(Color::BLUE));
        assert_eq!(Color::parse("71368A"), Ok(Color::DARK_PURPLE));
        assert_eq!(Color::parse("#e67E22"), Ok(Color::ORANGE));
    }

    #[test]
    fn from_str_matches_parse() {
        let color: Color = "E74C3C".parse().unwrap();
        assert_eq!(color, Color::RED);
    }

    #[test]
    fn too_short() {
        assert_eq!(Color::parse("fffff"), Err(ColorError::TooShort));
        assert_eq!(Color::parse("#fffff"), Err(ColorError::TooShort));
        assert_eq!(Color::parse(""), Err(ColorError::TooShort));
        assert_eq!(Color::parse("#"), Err(ColorError::TooShort));
    }

    #[test]
    fn too_long() {
        assert_eq!(Color::parse("fffffff"), Err(ColorError::TooLong));
        assert_eq!(Color::parse("##ffffff"), Err(ColorError::TooLong));
    }

    #[test]
    fn malformed() {
        assert_eq!(Color::parse("foobar"), Err(ColorError::Malformed));
        assert_eq!(Color::parse("#12345g"), Err(ColorError::Malformed));
    }

    #[test]
    fn rejects_signed_input() {
        assert_eq!(Color::parse("+fffff"), Err(ColorError::Malformed));
    }

    #[test]
    fn length_is_checked_before_content() {
        assert_eq!(Color::parse("xyz"), Err(ColorError::TooShort));
        assert_eq!(Color::parse("not a color"), Err(ColorError::TooLong));
    }

    #[test]
    fn counts_characters_not_bytes() {
        // Three two-byte characters
        assert_eq!(Color::parse("ééé"), Err(ColorError::TooShort));
    }
}

mod round_trip {
    use super::*;

    #[test]
    fn parse_of_format_is_identity() {
        for value in [0, 1, 0xFF, 0x1234, 0xAB_CD_EF, Color::MAX] {
            let color = Color::new(value);
            assert_eq!(Color::parse(&color.to_string()), Ok(color));
        }
    }

    #[test]
    fn parse_of_format_holds_across_range() {
        // Odd stride so every hex digit position takes many values
        for value in (0..=Color::MAX).step_by(997).chain([Color::MAX]) {
            let color = Color::new(value);
            assert_eq!(Color::parse(&color.to_string()), Ok(color), "{value:#X}");
        }
    }

    #[test]
    fn parse_of_format_holds_for_every_channel_value() {
        for channel in 0..=u8::MAX {
            for color in [
                Color::from_rgb(channel, 0, 0),
                Color::from_rgb(0, channel, 0),
                Color::from_rgb(0, 0, channel),
                Color::from_rgb(channel, channel, channel),
            ] {
                assert_eq!(Color::parse(&color.to_string()), Ok(color));
                assert_eq!(Color::parse(&color.to_string().to_lowercase()), Ok(color));
            }
        }
    }

    #[test]
    fn format_of_parse_is_canonical() {
        for (input, canonical) in [
            ("2ecc71", "#2ECC71"),
            ("#2eCC71", "#2ECC71"),
            ("FFFF00", "#FFFF00"),
        ] {
            assert_eq!(Color::parse(input).unwrap().to_string(), canonical);
        }
    }
}

mod channels {
    use super::*;

    #[test]
    fn from_rgb_packs_channels() {
        assert_eq!(Color::from_rgb(0x2E, 0xCC, 0x71), Color::GREEN);
    }

    #[test]
    fn accessors_unpack_channels() {
        let color = Color::ORANGE;
        assert_eq!((color.r(), color.g(), color.b()), (0xE6, 0x7E, 0x22));
    }
}

mod serde_repr {
    use super::*;

    #[test]
    fn serializes_as_integer() {
        assert_eq!(serde_json::to_string(&Color::GREEN).unwrap(), "3066993");
    }

    #[test]
    fn deserializes_from_integer() {
        let color: Color = serde_json::from_str("15158332").unwrap();
        assert_eq!(color, Color::RED);
    }
}

#[test]
fn errors_are_comparable_and_displayable() {
    assert_ne!(ColorError::TooShort, ColorError::TooLong);
    assert!(ColorError::Malformed.to_string().contains("malformed"));
}
