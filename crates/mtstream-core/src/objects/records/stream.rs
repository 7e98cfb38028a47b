//! Stream-level bookkeeping records.

use std::ops::RangeInclusive;

use serde::Serialize;

use super::Record;
use crate::objects::DataObjectType;
use crate::objects::error::DecodeError;
use crate::objects::layout;
use crate::objects::primitives::RawName;
use crate::objects::reader::FieldReader;
use crate::source::ByteSource;

/// First record of every stream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StreamHeader {
    pub marker: u32,
    pub size_including_tag: u32,
    /// Fixed 16-byte field, NUL padded.
    pub name: RawName,
    pub project_id: [u8; 2],
    /// Consistent across builds.
    pub unknown1: [u8; 4],
    pub unknown2: u16,
}

impl Record for StreamHeader {
    const TYPE: DataObjectType = DataObjectType::StreamHeader;
    const REVISIONS: RangeInclusive<u16> = layout::STREAM_HEADER_REVISIONS;

    fn decode<S: ByteSource + ?Sized>(
        r: &mut FieldReader<'_, S>,
        _revision: u16,
    ) -> Result<Self, DecodeError> {
        let marker = r.read_u32()?;
        r.check_marker(Self::TYPE, layout::STREAM_HEADER_MARKER, marker)?;
        let size_including_tag = r.read_u32()?;
        let name = RawName::from(r.read_array::<{ layout::STREAM_HEADER_NAME_LEN }>()?.to_vec());
        let project_id = r.read_array()?;
        let unknown1 = r.read_array()?;
        let unknown2 = r.read_u16()?;
        r.finish_declared_size(Self::TYPE, size_including_tag)?;

        Ok(StreamHeader {
            marker,
            size_including_tag,
            name,
            project_id,
            unknown1,
            unknown2,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Unknown3ec {
    pub marker: u32,
    pub size_including_tag: u32,
    pub unknown1: [u8; 2],
    pub unknown2: u32,
    pub unknown3: u16,
    pub unknown4: u16,
}

impl Record for Unknown3ec {
    const TYPE: DataObjectType = DataObjectType::Unknown3ec;
    const REVISIONS: RangeInclusive<u16> = layout::UNKNOWN_3EC_REVISIONS;

    fn decode<S: ByteSource + ?Sized>(
        r: &mut FieldReader<'_, S>,
        _revision: u16,
    ) -> Result<Self, DecodeError> {
        let marker = r.read_u32()?;
        r.check_marker(Self::TYPE, layout::UNKNOWN_3EC_MARKER, marker)?;
        let size_including_tag = r.read_u32()?;
        let record = Unknown3ec {
            marker,
            size_including_tag,
            unknown1: r.read_array()?,
            unknown2: r.read_u32()?,
            unknown3: r.read_u16()?,
            unknown4: r.read_u16()?,
        };
        r.finish_declared_size(Self::TYPE, size_including_tag)?;
        Ok(record)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Unknown17 {
    pub marker: u32,
    pub size_including_tag: u32,
    pub unknown1: [u8; 6],
}

impl Record for Unknown17 {
    const TYPE: DataObjectType = DataObjectType::Unknown17;
    const REVISIONS: RangeInclusive<u16> = layout::UNKNOWN_17_REVISIONS;

    fn decode<S: ByteSource + ?Sized>(
        r: &mut FieldReader<'_, S>,
        _revision: u16,
    ) -> Result<Self, DecodeError> {
        let marker = r.read_u32()?;
        r.check_marker(Self::TYPE, layout::UNKNOWN_17_MARKER, marker)?;
        let size_including_tag = r.read_u32()?;
        let unknown1 = r.read_array()?;
        r.finish_declared_size(Self::TYPE, size_including_tag)?;
        Ok(Unknown17 {
            marker,
            size_including_tag,
            unknown1,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Unknown19 {
    pub marker: u32,
    pub size_including_tag: u32,
    pub unknown1: [u8; 2],
}

impl Record for Unknown19 {
    const TYPE: DataObjectType = DataObjectType::Unknown19;
    const REVISIONS: RangeInclusive<u16> = layout::UNKNOWN_19_REVISIONS;

    fn decode<S: ByteSource + ?Sized>(
        r: &mut FieldReader<'_, S>,
        _revision: u16,
    ) -> Result<Self, DecodeError> {
        let marker = r.read_u32()?;
        r.check_marker(Self::TYPE, layout::UNKNOWN_19_MARKER, marker)?;
        let size_including_tag = r.read_u32()?;
        let unknown1 = r.read_array()?;
        r.finish_declared_size(Self::TYPE, size_including_tag)?;
        Ok(Unknown19 {
            marker,
            size_including_tag,
            unknown1,
        })
    }
}

/// Leftover of a deleted object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Debris {
    pub marker: u32,
    pub size_including_tag: u32,
}

impl Record for Debris {
    const TYPE: DataObjectType = DataObjectType::Debris;
    const REVISIONS: RangeInclusive<u16> = layout::DEBRIS_REVISIONS;

    fn decode<S: ByteSource + ?Sized>(
        r: &mut FieldReader<'_, S>,
        _revision: u16,
    ) -> Result<Self, DecodeError> {
        let marker = r.read_u32()?;
        r.check_marker(Self::TYPE, layout::DEBRIS_MARKER, marker)?;
        let size_including_tag = r.read_u32()?;
        r.finish_declared_size(Self::TYPE, size_including_tag)?;
        Ok(Debris {
            marker,
            size_including_tag,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EndOfStream {
    pub unknown1: u32,
    pub unknown2: u32,
}

impl Record for EndOfStream {
    const TYPE: DataObjectType = DataObjectType::EndOfStream;
    const REVISIONS: RangeInclusive<u16> = layout::END_OF_STREAM_REVISIONS;

    fn decode<S: ByteSource + ?Sized>(
        r: &mut FieldReader<'_, S>,
        _revision: u16,
    ) -> Result<Self, DecodeError> {
        Ok(EndOfStream {
            unknown1: r.read_u32()?,
            unknown2: r.read_u32()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{Debris, EndOfStream, StreamHeader, Unknown17, Unknown19, Unknown3ec};
    use crate::objects::error::DecodeError;
    use crate::objects::layout;
    use crate::objects::records::decode_record;
    use crate::objects::records::test_support::{Body, assert_prefixes_truncated, mac, windows};
    use crate::options::DecodeOptions;
    use crate::source::SliceSource;

    fn stream_header_body() -> Vec<u8> {
        let mut name = [0u8; 16];
        name[..7].copy_from_slice(b"Project");
        Body::new(mac())
            .u32(layout::STREAM_HEADER_MARKER)
            .u32(38)
            .raw(&name)
            .raw(&[0xab, 0xcd])
            .raw(&[1, 2, 3, 4])
            .u16(0)
            .bytes
    }

    #[test]
    fn stream_header_decodes() {
        let bytes = stream_header_body();
        let mut source = SliceSource::new(&bytes);
        let header: StreamHeader =
            decode_record(&mut source, 0, mac(), &DecodeOptions::default()).unwrap();
        assert_eq!(header.name.to_display_string(), "Project");
        assert_eq!(header.project_id, [0xab, 0xcd]);
        assert_eq!(header.size_including_tag, 38);
        assert_eq!(source.remaining(), 0);
    }

    #[test]
    fn stream_header_bad_marker() {
        let mut bytes = stream_header_body();
        bytes[3] ^= 0xff;
        let mut source = SliceSource::new(&bytes);
        let err = decode_record::<StreamHeader, _>(&mut source, 0, mac(), &DecodeOptions::default())
            .unwrap_err();
        assert!(matches!(err, DecodeError::InvalidMarker { .. }));
    }

    #[test]
    fn debris_consumes_exactly_its_bytes() {
        let mut bytes = Body::new(windows())
            .u32(layout::DEBRIS_MARKER)
            .u32(14)
            .bytes;
        bytes.extend_from_slice(&[0xee; 3]);
        let mut source = SliceSource::new(&bytes);
        let debris: Debris =
            decode_record(&mut source, 0, windows(), &DecodeOptions::default()).unwrap();
        assert_eq!(debris.marker, layout::DEBRIS_MARKER);
        assert_eq!(debris.size_including_tag, 14);
        assert_eq!(source.remaining(), 3);
    }

    #[test]
    fn debris_size_too_small_is_inconsistent() {
        let bytes = Body::new(windows())
            .u32(layout::DEBRIS_MARKER)
            .u32(8)
            .bytes;
        let mut source = SliceSource::new(&bytes);
        let err = decode_record::<Debris, _>(&mut source, 0, windows(), &DecodeOptions::default())
            .unwrap_err();
        assert!(matches!(
            err,
            DecodeError::InconsistentLength {
                declared: 8,
                actual: 14,
                ..
            }
        ));
    }

    #[test]
    fn unknown_records_decode() {
        let body = Body::new(mac())
            .u32(layout::UNKNOWN_3EC_MARKER)
            .u32(24)
            .raw(&[9, 8])
            .u32(0x1234)
            .u16(5)
            .u16(6);
        assert_eq!(body.record_len(), 24);
        let mut source = SliceSource::new(&body.bytes);
        let rec: Unknown3ec =
            decode_record(&mut source, 0, mac(), &DecodeOptions::default()).unwrap();
        assert_eq!(rec.unknown1, [9, 8]);
        assert_eq!(rec.unknown2, 0x1234);
        assert_eq!((rec.unknown3, rec.unknown4), (5, 6));

        let body = Body::new(mac())
            .u32(layout::UNKNOWN_17_MARKER)
            .u32(20)
            .raw(&[1, 2, 3, 4, 5, 6]);
        let mut source = SliceSource::new(&body.bytes);
        let rec: Unknown17 =
            decode_record(&mut source, 0, mac(), &DecodeOptions::default()).unwrap();
        assert_eq!(rec.unknown1, [1, 2, 3, 4, 5, 6]);

        let body = Body::new(mac())
            .u32(layout::UNKNOWN_19_MARKER)
            .u32(16)
            .raw(&[7, 7]);
        let mut source = SliceSource::new(&body.bytes);
        let rec: Unknown19 =
            decode_record(&mut source, 0, mac(), &DecodeOptions::default()).unwrap();
        assert_eq!(rec.unknown1, [7, 7]);
    }

    #[test]
    fn end_of_stream_reads_two_words() {
        let bytes = Body::new(windows()).u32(1).u32(2).bytes;
        let mut source = SliceSource::new(&bytes);
        let eos: EndOfStream =
            decode_record(&mut source, 0, windows(), &DecodeOptions::default()).unwrap();
        assert_eq!((eos.unknown1, eos.unknown2), (1, 2));
    }

    #[test]
    fn every_prefix_is_truncated() {
        assert_prefixes_truncated::<StreamHeader>(&stream_header_body(), 0, mac());

        let body = Body::new(windows())
            .u32(layout::UNKNOWN_3EC_MARKER)
            .u32(24)
            .raw(&[9, 8])
            .u32(0x1234)
            .u16(5)
            .u16(6);
        assert_prefixes_truncated::<Unknown3ec>(&body.bytes, 0, windows());

        let body = Body::new(mac())
            .u32(layout::UNKNOWN_17_MARKER)
            .u32(20)
            .zeros(6);
        assert_prefixes_truncated::<Unknown17>(&body.bytes, 0, mac());

        let body = Body::new(mac())
            .u32(layout::UNKNOWN_19_MARKER)
            .u32(16)
            .zeros(2);
        assert_prefixes_truncated::<Unknown19>(&body.bytes, 0, mac());

        let body = Body::new(windows())
            .u32(layout::DEBRIS_MARKER)
            .u32(14);
        assert_prefixes_truncated::<Debris>(&body.bytes, 0, windows());

        let body = Body::new(windows()).u32(1).u32(2);
        assert_prefixes_truncated::<EndOfStream>(&body.bytes, 0, windows());
    }
}
