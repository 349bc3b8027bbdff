//! GEFS ensemble member identifiers.

use std::cmp::Ordering;

/// One member of the GEFS tropical ensemble as it appears in an A-deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnsembleMember {
    /// `AEMN`, the ensemble mean.
    Mean,
    /// `AC00`, the unperturbed control run.
    Control,
    /// `APnn`, perturbation member `nn`.
    Perturbation(u8),
}

impl EnsembleMember {
    /// Classify an upper-case ATCF technique id; anything else is `None`.
    pub fn parse(id: &str) -> Option<Self> {
        match id {
            "AEMN" => Some(EnsembleMember::Mean),
            "AC00" => Some(EnsembleMember::Control),
            _ => {
                let digits = id.strip_prefix("AP")?;
                if digits.len() != 2 || !digits.bytes().all(|b| b.is_ascii_digit()) {
                    return None;
                }
                digits.parse().ok().map(EnsembleMember::Perturbation)
            }
        }
    }

    /// Display priority: mean first, control second, perturbations after.
    pub fn rank(&self) -> u8 {
        match self {
            EnsembleMember::Mean => 0,
            EnsembleMember::Control => 1,
            EnsembleMember::Perturbation(_) => 2,
        }
    }
}

/// Order model ids by member rank, then lexicographically.
pub fn compare_model_ids(a: &str, b: &str) -> Ordering {
    let rank = |id: &str| EnsembleMember::parse(id).map_or(u8::MAX, |m| m.rank());
    rank(a).cmp(&rank(b)).then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_members() {
        assert_eq!(EnsembleMember::parse("AEMN"), Some(EnsembleMember::Mean));
        assert_eq!(EnsembleMember::parse("AC00"), Some(EnsembleMember::Control));
        assert_eq!(
            EnsembleMember::parse("AP03"),
            Some(EnsembleMember::Perturbation(3))
        );
        assert_eq!(
            EnsembleMember::parse("AP30"),
            Some(EnsembleMember::Perturbation(30))
        );
    }

    #[test]
    fn test_rejects_other_techniques() {
        for id in ["AVNO", "OFCL", "AP1", "AP001", "APXX", "ac00", "AEMI", "AC01"] {
            assert_eq!(EnsembleMember::parse(id), None, "{} should be rejected", id);
        }
    }

    #[test]
    fn test_compare_model_ids() {
        let mut ids = vec!["AP02", "AEMN", "AC00", "AP01"];
        ids.sort_by(|a, b| compare_model_ids(a, b));
        assert_eq!(ids, vec!["AEMN", "AC00", "AP01", "AP02"]);
    }
}
