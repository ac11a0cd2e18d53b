//! SBF satellite identifiers
use gnss::prelude::{Constellation, SV};

/// Converts an SBF SVID to [SV]. Returns None for reserved
/// or unknown identifiers.
pub fn svid_to_sv(svid: u16) -> Option<SV> {
    let (constellation, prn) = match svid {
        1..=37 => (Constellation::GPS, svid),
        38..=61 => (Constellation::Glonass, svid - 37),
        // GLONASS slot unknown
        62 => (Constellation::Glonass, 0),
        63..=68 => (Constellation::Glonass, svid - 38),
        71..=106 => (Constellation::Galileo, svid - 70),
        120..=140 => (Constellation::SBAS, svid - 100),
        141..=180 => (Constellation::BeiDou, svid - 140),
        181..=187 => (Constellation::QZSS, svid - 180),
        191..=197 => (Constellation::IRNSS, svid - 190),
        198..=215 => (Constellation::SBAS, svid - 57),
        216..=222 => (Constellation::IRNSS, svid - 208),
        223..=245 => (Constellation::BeiDou, svid - 182),
        _ => return None,
    };
    Some(SV::new(constellation, prn as u8))
}

/// Legend label for this SVID
pub(crate) fn svid_label(svid: u16) -> String {
    match svid_to_sv(svid) {
        Some(sv) => sv.to_string(),
        None => format!("SVID{}", svid),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    #[test]
    fn sbf_svid_mapping() {
        for (svid, expected) in [
            (1, Some(SV::new(Constellation::GPS, 1))),
            (32, Some(SV::new(Constellation::GPS, 32))),
            (38, Some(SV::new(Constellation::Glonass, 1))),
            (71, Some(SV::new(Constellation::Galileo, 1))),
            (101, Some(SV::new(Constellation::Galileo, 31))),
            (123, Some(SV::new(Constellation::SBAS, 23))),
            (141, Some(SV::new(Constellation::BeiDou, 1))),
            (181, Some(SV::new(Constellation::QZSS, 1))),
            (191, Some(SV::new(Constellation::IRNSS, 1))),
            (223, Some(SV::new(Constellation::BeiDou, 41))),
            (0, None),
            (69, None),
            (250, None),
        ] {
            assert_eq!(svid_to_sv(svid), expected, "svid={}", svid);
        }
    }
    #[test]
    fn unknown_svid_label() {
        assert_eq!(svid_label(0), "SVID0");
        assert_eq!(svid_label(250), "SVID250");
    }
}
