use crate::{
    prelude::*,
    tests::toolkit::{temporary_dir, test_resource},
};
use std::str::FromStr;

#[test]
fn channel_status_table() {
    let path = test_resource("STF/ZEEG2000_ChannelStatus_1.stf");
    let records = parse_channel_status(&path).unwrap();
    assert_eq!(records.len(), 10);

    assert_eq!(records[0], ChannelStatusRecord::new(1860, 7200.0, 5, 30.0, 45.0));
    assert_eq!(records[2].svid, 71);
    assert_eq!(records[2].elevation, -128.0);
    assert_eq!(records[9].svid, 142);

    let mask = filter_valid(&records, &ValidityPolicy::default());
    assert_eq!(mask.iter().filter(|valid| **valid).count(), 8);

    let valid = valid_subset(&records, &mask);
    let svids = distinct_satellites(&valid);
    assert_eq!(svids, vec![5, 23, 71, 142]);

    let tracks = build_all_tracks(&svids, &valid, HourlyMatch::Exact);
    assert_eq!(tracks[0].tow, vec![7200.0, 7201.0, 10800.0]);
    assert_eq!(tracks[0].hourly_tow, vec![7200.0, 10800.0]);
    assert_eq!(tracks[2].tow, vec![7201.0]);
    assert!(tracks[2].hourly_tow.is_empty());
    assert_eq!(tracks[3].hourly_elevation, vec![8.0]);
}

#[test]
fn bare_sbf_field_names() {
    let dir = temporary_dir();
    let path = dir.join("bare.stf");
    std::fs::write(
        &path,
        "TOW,WNc,SVID,Azimuth,Elevation\n3600,2100,12,180.5,42.0\n",
    )
    .unwrap();
    let records = parse_channel_status(&path).unwrap();
    assert_eq!(records, vec![ChannelStatusRecord::new(2100, 3600.0, 12, 42.0, 180.5)]);
}

#[test]
fn malformed_tables() {
    let dir = temporary_dir();

    let path = dir.join("missing_column.stf");
    std::fs::write(&path, "CHST_TOW,CHST_WNC,CHST_SVID,CHST_Azimuth\n0,1860,1,10.0\n").unwrap();
    assert!(matches!(
        parse_channel_status(&path),
        Err(Error::Parse { .. })
    ));

    let path = dir.join("bad_value.stf");
    std::fs::write(
        &path,
        "CHST_TOW,CHST_WNC,CHST_SVID,CHST_Azimuth,CHST_Elevation\n0,1860,1,10.0,12.0\n30,1860,abc,10.0,12.0\n",
    )
    .unwrap();
    match parse_channel_status(&path) {
        Err(Error::Parse { path: p, line, .. }) => {
            assert_eq!(p, path);
            assert_eq!(line, 3);
        },
        other => panic!("unexpected result: {:?}", other),
    }

    assert!(matches!(
        parse_channel_status(dir.join("does_not_exist.stf")),
        Err(Error::IoError(_))
    ));
}

#[test]
fn sbf_block_names() {
    for (name, block) in [
        ("ChannelStatus_1", StfBlock::ChannelStatus1),
        ("MeasEpoch_2", StfBlock::MeasEpoch2),
        ("PVTGeodetic_2", StfBlock::PvtGeodetic2),
        ("DOP_2", StfBlock::DOP2),
    ] {
        let parsed = StfBlock::from_str(name).unwrap();
        assert_eq!(parsed, block);
        assert_eq!(parsed.to_string(), name);
    }
    assert!(StfBlock::ChannelStatus1.has_angles());
    assert!(!StfBlock::MeasEpoch2.has_angles());
    assert!(matches!(
        StfBlock::from_str("ChannelStatus_9"),
        Err(Error::UnknownBlock(_))
    ));
    assert_eq!(
        StfBlock::ChannelStatus1.table_name(std::path::Path::new("data/ZEEG2000.16_")),
        "ZEEG2000_ChannelStatus_1.stf"
    );
}
