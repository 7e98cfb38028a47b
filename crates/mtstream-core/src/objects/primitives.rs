//! Small structured values embedded in records.

use serde::{Serialize, Serializer};

use super::SystemType;
use super::error::DecodeError;
use super::reader::FieldReader;
use crate::source::ByteSource;

/// Length-prefixed name bytes, kept exactly as stored.
///
/// Names are not NUL-terminated on disk but are displayed as C strings, so
/// `to_display_string` stops at the first NUL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawName(Vec<u8>);

impl RawName {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_display_string(&self) -> String {
        let end = self.0.iter().position(|b| *b == 0).unwrap_or(self.0.len());
        String::from_utf8_lossy(&self.0[..end]).into_owned()
    }
}

impl From<Vec<u8>> for RawName {
    fn from(value: Vec<u8>) -> Self {
        Self(value)
    }
}

impl Serialize for RawName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_display_string())
    }
}

/// Rectangle in editor coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Rect {
    pub top: i16,
    pub left: i16,
    pub bottom: i16,
    pub right: i16,
}

impl Rect {
    /// Mac streams store top/left/bottom/right, Windows streams
    /// left/top/right/bottom.
    pub fn decode<S: ByteSource + ?Sized>(r: &mut FieldReader<'_, S>) -> Result<Self, DecodeError> {
        let (a, b, c, d) = (r.read_i16()?, r.read_i16()?, r.read_i16()?, r.read_i16()?);
        Ok(match r.system_type() {
            SystemType::Mac => Rect {
                top: a,
                left: b,
                bottom: c,
                right: d,
            },
            SystemType::Windows => Rect {
                left: a,
                top: b,
                right: c,
                bottom: d,
            },
        })
    }

    pub fn width(&self) -> i32 {
        self.right as i32 - self.left as i32
    }

    pub fn height(&self) -> i32 {
        self.bottom as i32 - self.top as i32
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Point {
    pub top: i16,
    pub left: i16,
}

impl Point {
    /// Same platform ordering rule as `Rect`.
    pub fn decode<S: ByteSource + ?Sized>(r: &mut FieldReader<'_, S>) -> Result<Self, DecodeError> {
        let (a, b) = (r.read_i16()?, r.read_i16()?);
        Ok(match r.system_type() {
            SystemType::Mac => Point { top: a, left: b },
            SystemType::Windows => Point { left: a, top: b },
        })
    }
}

/// Reference to a messaging event (id plus event-specific info).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Event {
    pub event_id: u32,
    pub event_info: u32,
}

impl Event {
    pub fn decode<S: ByteSource + ?Sized>(r: &mut FieldReader<'_, S>) -> Result<Self, DecodeError> {
        Ok(Event {
            event_id: r.read_u32()?,
            event_info: r.read_u32()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{Event, Point, RawName, Rect};
    use crate::objects::error::DecodeError;
    use crate::objects::reader::FieldReader;
    use crate::objects::{SerializationProperties, SystemType};
    use crate::options::DecodeOptions;
    use crate::source::SliceSource;

    fn words_be(values: &[i16]) -> Vec<u8> {
        values.iter().flat_map(|v| v.to_be_bytes()).collect()
    }

    #[test]
    fn rect_mac_order() {
        let bytes = words_be(&[1, 2, 3, 4]);
        let options = DecodeOptions::default();
        let props = SerializationProperties {
            is_byte_swapped: true,
            system_type: SystemType::Mac,
        };
        let mut source = SliceSource::new(&bytes);
        let mut reader = FieldReader::new(&mut source, props, &options);
        let rect = Rect::decode(&mut reader).unwrap();
        assert_eq!(
            rect,
            Rect {
                top: 1,
                left: 2,
                bottom: 3,
                right: 4
            }
        );
        assert_eq!(rect.width(), 2);
        assert_eq!(rect.height(), 2);
    }

    #[test]
    fn rect_windows_order() {
        let bytes: Vec<u8> = [10i16, 20, 110, 220]
            .iter()
            .flat_map(|v| v.to_le_bytes())
            .collect();
        let options = DecodeOptions::default();
        let props = SerializationProperties {
            is_byte_swapped: false,
            system_type: SystemType::Windows,
        };
        let mut source = SliceSource::new(&bytes);
        let mut reader = FieldReader::new(&mut source, props, &options);
        let rect = Rect::decode(&mut reader).unwrap();
        assert_eq!(rect.left, 10);
        assert_eq!(rect.top, 20);
        assert_eq!(rect.right, 110);
        assert_eq!(rect.bottom, 220);
    }

    #[test]
    fn point_and_event() {
        let mut bytes = words_be(&[-5, 7]);
        bytes.extend_from_slice(&0x0000_0001u32.to_be_bytes());
        bytes.extend_from_slice(&0x0000_0002u32.to_be_bytes());
        let options = DecodeOptions::default();
        let props = SerializationProperties {
            is_byte_swapped: true,
            system_type: SystemType::Mac,
        };
        let mut source = SliceSource::new(&bytes);
        let mut reader = FieldReader::new(&mut source, props, &options);
        assert_eq!(
            Point::decode(&mut reader).unwrap(),
            Point { top: -5, left: 7 }
        );
        assert_eq!(
            Event::decode(&mut reader).unwrap(),
            Event {
                event_id: 1,
                event_info: 2
            }
        );
    }

    #[test]
    fn truncated_rect_fails() {
        let bytes = words_be(&[1, 2, 3]);
        let options = DecodeOptions::default();
        let props = SerializationProperties {
            is_byte_swapped: true,
            system_type: SystemType::Mac,
        };
        let mut source = SliceSource::new(&bytes);
        let mut reader = FieldReader::new(&mut source, props, &options);
        assert!(matches!(
            Rect::decode(&mut reader),
            Err(DecodeError::Truncated { .. })
        ));
    }

    #[test]
    fn display_string_stops_at_nul() {
        let name = RawName::from(b"Scene 1\0junk".to_vec());
        assert_eq!(name.to_display_string(), "Scene 1");
        assert_eq!(name.len(), 12);
        assert_eq!(
            serde_json::to_value(&name).unwrap(),
            serde_json::json!("Scene 1")
        );
    }
}
