use crate::error::ColorError;

/// Parses the `#rrggbb` value of an HTML color input into RGB in `[0, 1]`.
pub fn parse_hex_color(value: &str) -> Result<[f32; 3], ColorError> {
    let malformed = || ColorError::Malformed(value.to_owned());

    let hex = value.strip_prefix('#').ok_or_else(malformed)?;
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(malformed());
    }

    let mut rgb = [0.0; 3];
    for (i, channel) in rgb.iter_mut().enumerate() {
        let byte = u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16).map_err(|_| malformed())?;
        *channel = byte as f32 / 255.0;
    }
    Ok(rgb)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_primary_colors() {
        assert_eq!(parse_hex_color("#ff0000"), Ok([1.0, 0.0, 0.0]));
        assert_eq!(parse_hex_color("#00FF00"), Ok([0.0, 1.0, 0.0]));
        assert_eq!(parse_hex_color("#000000"), Ok([0.0, 0.0, 0.0]));
    }

    #[test]
    fn scales_each_channel() {
        let [r, g, b] = parse_hex_color("#336699").unwrap();
        assert!((r - 0.2).abs() < 1e-6);
        assert!((g - 0.4).abs() < 1e-6);
        assert!((b - 0.6).abs() < 1e-6);
    }

    #[test]
    fn rejects_malformed_values() {
        for value in ["", "ff0000", "#fff", "#ff00000", "#gg0000", "#ff 000"] {
            assert_eq!(
                parse_hex_color(value),
                Err(ColorError::Malformed(value.to_owned())),
                "{value:?}"
            );
        }
    }
}
