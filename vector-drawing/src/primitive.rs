use std::fmt;
use std::str::FromStr;

use crate::error::SceneError;

/// Topology applied to a shape's vertices when it is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Points,
    Lines,
    LineStrip,
    LineLoop,
    Triangles,
    TriangleStrip,
    TriangleFan,
}

const MODE_NAMES: [(&str, PrimitiveKind); 7] = [
    ("POINTS", PrimitiveKind::Points),
    ("LINES", PrimitiveKind::Lines),
    ("LINE_STRIP", PrimitiveKind::LineStrip),
    ("LINE_LOOP", PrimitiveKind::LineLoop),
    ("TRIANGLES", PrimitiveKind::Triangles),
    ("TRIANGLE_STRIP", PrimitiveKind::TriangleStrip),
    ("TRIANGLE_FAN", PrimitiveKind::TriangleFan),
];

impl PrimitiveKind {
    pub const ALL: [PrimitiveKind; 7] = [
        PrimitiveKind::Points,
        PrimitiveKind::Lines,
        PrimitiveKind::LineStrip,
        PrimitiveKind::LineLoop,
        PrimitiveKind::Triangles,
        PrimitiveKind::TriangleStrip,
        PrimitiveKind::TriangleFan,
    ];

    /// Looks up a mode name as offered by the mode selector. Case-sensitive.
    pub fn from_mode_name(name: &str) -> Result<Self, SceneError> {
        MODE_NAMES
            .iter()
            .find(|(mode, _)| *mode == name)
            .map(|(_, kind)| *kind)
            .ok_or_else(|| SceneError::InvalidMode(name.to_owned()))
    }

    pub fn mode_name(self) -> &'static str {
        match self {
            PrimitiveKind::Points => "POINTS",
            PrimitiveKind::Lines => "LINES",
            PrimitiveKind::LineStrip => "LINE_STRIP",
            PrimitiveKind::LineLoop => "LINE_LOOP",
            PrimitiveKind::Triangles => "TRIANGLES",
            PrimitiveKind::TriangleStrip => "TRIANGLE_STRIP",
            PrimitiveKind::TriangleFan => "TRIANGLE_FAN",
        }
    }
}

impl FromStr for PrimitiveKind {
    type Err = SceneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_mode_name(s)
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mode_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_mode_name_maps_back() {
        for kind in PrimitiveKind::ALL {
            assert_eq!(PrimitiveKind::from_mode_name(kind.mode_name()), Ok(kind));
        }
    }

    #[test]
    fn triangle_fan_lookup() {
        assert_eq!(
            "TRIANGLE_FAN".parse::<PrimitiveKind>(),
            Ok(PrimitiveKind::TriangleFan)
        );
    }

    #[test]
    fn unknown_names_are_rejected() {
        assert_eq!(
            PrimitiveKind::from_mode_name("bogus"),
            Err(SceneError::InvalidMode("bogus".into()))
        );
        // lookup is case-sensitive
        assert_eq!(
            PrimitiveKind::from_mode_name("lines"),
            Err(SceneError::InvalidMode("lines".into()))
        );
        assert!(PrimitiveKind::from_mode_name("").is_err());
    }
}
