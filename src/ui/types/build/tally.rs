use crate::error::Result;
use crate::tally::{ClusteredMeanTally, MeanTally, MedianTally, Tally, TrimmedMeanTally};
use crate::ui::types::choices::{TallyChoice, TrimmedMeanParameters};

impl TryFrom<TrimmedMeanParameters> for TrimmedMeanTally {
    type Error = crate::error::TallyError;

    fn try_from(p: TrimmedMeanParameters) -> Result<Self> {
        TrimmedMeanTally::new(p.trim_fraction)
    }
}

pub fn build_tally(choice: &TallyChoice) -> Result<Box<dyn Tally>> {
    match choice {
        TallyChoice::ClusteredMean => Ok(Box::new(ClusteredMeanTally)),
        TallyChoice::Mean => Ok(Box::new(MeanTally)),
        TallyChoice::Median => Ok(Box::new(MedianTally)),
        TallyChoice::TrimmedMean(p) => Ok(Box::new(TrimmedMeanTally::try_from(*p)?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TallyError;
    use crate::ui::types::choices::TallyKind;
    use strum::IntoEnumIterator;

    #[test]
    fn every_kind_builds_a_tally_with_matching_name() {
        for kind in TallyKind::iter() {
            let tally = build_tally(&TallyChoice::from_kind(kind)).unwrap();
            let key: &'static str = kind.into();
            assert_eq!(tally.name(), key);
        }
    }

    #[test]
    fn invalid_trim_fraction_fails_to_build() {
        let choice = TallyChoice::TrimmedMean(TrimmedMeanParameters { trim_fraction: 0.7 });
        assert!(matches!(
            build_tally(&choice),
            Err(TallyError::InvalidParameter(_))
        ));
    }
}
