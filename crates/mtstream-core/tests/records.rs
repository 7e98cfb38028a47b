use mtstream_core::{
    AssetType, DataObject, DataObjectType, DecodeError, DecodeOptions, SerializationProperties,
    SliceSource, TrailingBytesPolicy, create_object_from_type, read_record,
};

/// Big-endian (Mac) record body builder.
#[derive(Default)]
struct Be(Vec<u8>);

impl Be {
    fn u16(mut self, value: u16) -> Self {
        self.0.extend_from_slice(&value.to_be_bytes());
        self
    }

    fn u32(mut self, value: u32) -> Self {
        self.0.extend_from_slice(&value.to_be_bytes());
        self
    }

    fn raw(mut self, bytes: &[u8]) -> Self {
        self.0.extend_from_slice(bytes);
        self
    }
}

fn debris_body() -> Vec<u8> {
    Be::default().u32(0xDEBB_EEFD).u32(14).0
}

fn catalog_body() -> Vec<u8> {
    let names: [&[u8]; 2] = [b"Title card\0", b"Theme\0"];
    let mut body = Be::default()
        .u32(2)
        .u32(22 + names.iter().map(|n| n.len() as u32).sum::<u32>())
        .raw(&[0; 4])
        .u32(names.len() as u32);
    for (i, name) in names.iter().enumerate() {
        body = body
            .u32(0)
            .u16(name.len() as u16)
            .u16(0)
            .u32(0)
            .u32(0x100 * (i as u32 + 1))
            .u32(if i == 0 { 0x0e } else { 0x54 })
            .u32(0)
            .raw(name);
    }
    body.0
}

fn decode(tag: u32, revision: u16, body: &[u8]) -> Result<(DataObject, usize), DecodeError> {
    let mut object = create_object_from_type(tag);
    let mut source = SliceSource::new(body);
    object.decode(&mut source, revision, &SerializationProperties::mac())?;
    Ok((object, body.len() - source.remaining()))
}

#[test]
fn debris_consumes_exactly_its_payload() {
    let mut body = debris_body();
    body.extend_from_slice(&[0xaa; 3]);
    let (object, consumed) = decode(0xFFFF_FFFE, 0, &body).unwrap();
    assert_eq!(object.object_type(), DataObjectType::Debris);
    assert_eq!(consumed, 8);
}

#[test]
fn catalog_keeps_entry_order_and_names() {
    let body = catalog_body();
    let (object, consumed) = decode(0x0d, 4, &body).unwrap();
    assert_eq!(consumed, body.len());
    let DataObject::AssetCatalog(catalog) = object else {
        panic!("expected an asset catalog");
    };
    assert_eq!(catalog.assets.len(), 2);
    assert_eq!(catalog.assets[0].name.as_bytes(), b"Title card\0");
    assert_eq!(catalog.assets[0].kind(), AssetType::Image);
    assert_eq!(catalog.assets[1].name.to_display_string(), "Theme");
    assert_eq!(catalog.assets[1].kind(), AssetType::WaveformSound);
}

#[test]
fn truncated_records_fail_without_changing_the_object() {
    let cases: [(u32, u16, Vec<u8>); 2] =
        [(0xFFFF_FFFE, 0, debris_body()), (0x0d, 4, catalog_body())];
    for (tag, revision, body) in cases {
        let short = &body[..body.len() - 1];
        let mut object = create_object_from_type(tag);
        let before = object.clone();
        let mut source = SliceSource::new(short);
        let err = object
            .decode(&mut source, revision, &SerializationProperties::mac())
            .unwrap_err();
        assert!(matches!(err, DecodeError::Truncated { .. }), "tag {tag:#x}: {err}");
        assert_eq!(object, before);
    }
}

#[test]
fn oversized_declaration_is_policy_driven() {
    let mut body = Be::default().u32(0xDEBB_EEFD).u32(18).0;
    body.extend_from_slice(&[0; 4]);

    let (_, consumed) = decode(0xFFFF_FFFE, 0, &body).unwrap();
    assert_eq!(consumed, 12);

    let options = DecodeOptions {
        trailing_bytes: TrailingBytesPolicy::Reject,
        ..DecodeOptions::default()
    };
    let mut object = create_object_from_type(0xFFFF_FFFE);
    let err = object
        .decode_with_options(
            &mut SliceSource::new(&body),
            0,
            &SerializationProperties::mac(),
            &options,
        )
        .unwrap_err();
    assert!(matches!(err, DecodeError::InconsistentLength { .. }));
}

#[test]
fn framed_records_decode_in_sequence() {
    let mut stream = Vec::new();
    stream.extend_from_slice(&0xFFFF_FFFEu32.to_be_bytes());
    stream.extend_from_slice(&0u16.to_be_bytes());
    stream.extend_from_slice(&debris_body());
    stream.extend_from_slice(&0x9999u32.to_be_bytes());
    stream.extend_from_slice(&0u16.to_be_bytes());
    stream.extend_from_slice(&Be::default().u32(0).u32(16).raw(&[1, 2]).0);
    stream.extend_from_slice(&0x3e8u32.to_be_bytes());
    stream.extend_from_slice(&0u16.to_be_bytes());
    stream.extend_from_slice(&[0; 8]);

    let props = SerializationProperties::mac();
    let options = DecodeOptions::default();
    let mut source = SliceSource::new(&stream);
    let mut kinds = Vec::new();
    while source.remaining() > 0 {
        let object = read_record(&mut source, &props, &options).unwrap();
        kinds.push((object.object_type(), object.type_tag()));
    }
    assert_eq!(
        kinds,
        [
            (DataObjectType::Debris, 0xFFFF_FFFE),
            (DataObjectType::Unknown, 0x9999),
            (DataObjectType::EndOfStream, 0x3e8),
        ]
    );
}

#[test]
fn decoded_objects_serialize_to_json() {
    let (object, _) = decode(0x0d, 4, &catalog_body()).unwrap();
    let value = serde_json::to_value(&object).unwrap();
    assert_eq!(value["type"], "AssetCatalog");
    assert_eq!(value["assets"][0]["name"], "Title card");
    assert_eq!(value["assets"][1]["file_position"], 0x200);
}
