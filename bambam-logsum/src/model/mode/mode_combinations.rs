use super::{Mode, PathType};
use std::collections::HashSet;

/// the table of structurally valid (mode, path type) pairs. the path choice
/// model never evaluates a pair that is missing from this table.
#[derive(Clone, Debug)]
pub struct ModeCombinations {
    allowed: HashSet<(Mode, PathType)>,
}

impl Default for ModeCombinations {
    fn default() -> Self {
        let allowed = Mode::ALL
            .iter()
            .flat_map(|mode| {
                default_path_types(mode)
                    .iter()
                    .map(move |path_type| (*mode, *path_type))
            })
            .collect();
        Self { allowed }
    }
}

impl ModeCombinations {
    /// builds the default table minus any pairs listed as excluded
    pub fn new(excluded: &[(Mode, PathType)]) -> ModeCombinations {
        let mut combinations = ModeCombinations::default();
        for pair in excluded {
            combinations.allowed.remove(pair);
        }
        combinations
    }

    pub fn contains(&self, mode: Mode, path_type: PathType) -> bool {
        self.allowed.contains(&(mode, path_type))
    }

    /// path types valid for this mode, in evaluation order
    pub fn path_types(&self, mode: Mode) -> Vec<PathType> {
        PathType::ALL
            .iter()
            .filter(|p| self.contains(mode, **p))
            .copied()
            .collect()
    }
}

fn default_path_types(mode: &Mode) -> &'static [PathType] {
    match mode {
        Mode::Walk | Mode::Bike => &[PathType::FullNetwork],
        Mode::Sov | Mode::HovDriver | Mode::HovPassenger => {
            &[PathType::FullNetwork, PathType::NoTolls]
        }
        _ => &PathType::TRANSIT,
    }
}

#[cfg(test)]
mod test {
    use super::ModeCombinations;
    use crate::model::mode::{Mode, PathType};

    #[test]
    fn test_default_table() {
        let table = ModeCombinations::default();
        assert_eq!(table.path_types(Mode::Walk), vec![PathType::FullNetwork]);
        assert_eq!(
            table.path_types(Mode::Sov),
            vec![PathType::FullNetwork, PathType::NoTolls]
        );
        assert_eq!(table.path_types(Mode::BikeOnTransit).len(), 5);
        assert!(!table.contains(Mode::Transit, PathType::NoTolls));
    }

    #[test]
    fn test_excluded_pairs_are_removed() {
        let table = ModeCombinations::new(&[(Mode::Sov, PathType::NoTolls)]);
        assert_eq!(table.path_types(Mode::Sov), vec![PathType::FullNetwork]);
        assert!(table.contains(Mode::HovDriver, PathType::NoTolls));
    }
}
