use std::{collections::HashSet, slice::Iter};

use crate::catalog;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    pub name: &'static str,
    pub sets: &'static str,
    pub reps: &'static str,
    pub description: &'static str,
    pub difficulty: Difficulty,
    pub muscle_groups: &'static [&'static str],
}

impl Exercise {
    #[must_use]
    pub fn trains(&self, muscle_group: &str) -> bool {
        self.muscle_groups
            .iter()
            .any(|m| m.eq_ignore_ascii_case(muscle_group))
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Property for Difficulty {
    fn iter() -> Iter<'static, Difficulty> {
        static DIFFICULTY: [Difficulty; 3] = [
            Difficulty::Beginner,
            Difficulty::Intermediate,
            Difficulty::Advanced,
        ];
        DIFFICULTY.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }
}

impl Difficulty {
    #[must_use]
    pub fn tone(self) -> Tone {
        match self {
            Difficulty::Beginner => Tone::Accent,
            Difficulty::Intermediate => Tone::Primary,
            Difficulty::Advanced => Tone::Destructive,
        }
    }
}

/// Badge color a view uses for a difficulty label.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Tone {
    Accent,
    Primary,
    Destructive,
}

#[derive(Default, Clone, Debug)]
pub struct ExerciseFilter {
    pub name: String,
    pub difficulty: HashSet<Difficulty>,
    pub muscle_groups: HashSet<&'static str>,
}

impl ExerciseFilter {
    #[must_use]
    pub fn exercises(&self) -> Vec<&'static Exercise> {
        self.filter(catalog::categories().iter().flat_map(|c| c.exercises.iter()))
    }

    #[must_use]
    pub fn filter<'a>(&self, exercises: impl Iterator<Item = &'a Exercise>) -> Vec<&'a Exercise> {
        let name = self.name.trim().to_lowercase();
        exercises
            .filter(|e| {
                e.name.to_lowercase().contains(&name)
                    && (self.difficulty.is_empty() || self.difficulty.contains(&e.difficulty))
                    && self.muscle_groups.iter().all(|m| e.trains(m))
            })
            .collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.trim().is_empty() && self.difficulty.is_empty() && self.muscle_groups.is_empty()
    }

    #[must_use]
    pub fn difficulty_list(&self) -> Vec<(Difficulty, bool)> {
        Difficulty::iter()
            .map(|d| (*d, self.difficulty.contains(d)))
            .collect::<Vec<_>>()
    }

    #[must_use]
    pub fn muscle_group_list(&self) -> Vec<(&'static str, bool)> {
        muscle_groups()
            .into_iter()
            .map(|m| (m, self.muscle_groups.contains(m)))
            .collect::<Vec<_>>()
    }

    pub fn toggle_difficulty(&mut self, difficulty: Difficulty) {
        if !self.difficulty.remove(&difficulty) {
            self.difficulty.insert(difficulty);
        }
    }

    pub fn toggle_muscle_group(&mut self, muscle_group: &'static str) {
        if !self.muscle_groups.remove(muscle_group) {
            self.muscle_groups.insert(muscle_group);
        }
    }
}

/// Distinct muscle groups of the library in order of first appearance.
#[must_use]
pub fn muscle_groups() -> Vec<&'static str> {
    let mut groups: Vec<&'static str> = vec![];
    for m in catalog::categories()
        .iter()
        .flat_map(|c| c.exercises.iter())
        .flat_map(|e| e.muscle_groups.iter())
    {
        if !groups.contains(m) {
            groups.push(m);
        }
    }
    groups
}

pub trait Property: Clone + Copy + Sized {
    fn iter() -> Iter<'static, Self>;
    fn name(self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    const SQUAT: Exercise = Exercise {
        name: "Squat",
        sets: "3",
        reps: "10",
        description: "",
        difficulty: Difficulty::Beginner,
        muscle_groups: &["Legs", "Glutes"],
    };
    const ROW: Exercise = Exercise {
        name: "Barbell Row",
        sets: "4",
        reps: "8",
        description: "",
        difficulty: Difficulty::Advanced,
        muscle_groups: &["Back", "Arms"],
    };

    #[test]
    fn test_difficulty_name() {
        let mut names = HashSet::new();

        for difficulty in Difficulty::iter() {
            let name = difficulty.name();

            assert!(!names.contains(name));

            names.insert(name);
        }
    }

    #[test]
    fn test_difficulty_order() {
        assert!(Difficulty::Beginner < Difficulty::Intermediate);
        assert!(Difficulty::Intermediate < Difficulty::Advanced);
    }

    #[rstest]
    #[case(Difficulty::Beginner, Tone::Accent)]
    #[case(Difficulty::Intermediate, Tone::Primary)]
    #[case(Difficulty::Advanced, Tone::Destructive)]
    fn test_difficulty_tone(#[case] difficulty: Difficulty, #[case] expected: Tone) {
        assert_eq!(difficulty.tone(), expected);
    }

    #[rstest]
    #[case("legs", true)]
    #[case("Glutes", true)]
    #[case("Back", false)]
    fn test_exercise_trains(#[case] muscle_group: &str, #[case] expected: bool) {
        assert_eq!(SQUAT.trains(muscle_group), expected);
    }

    #[rstest]
    #[case::empty(ExerciseFilter::default(), &["Squat", "Barbell Row"])]
    #[case::name(ExerciseFilter { name: "row".into(), ..ExerciseFilter::default() }, &["Barbell Row"])]
    #[case::name_upper_case(ExerciseFilter { name: " SQU ".into(), ..ExerciseFilter::default() }, &["Squat"])]
    #[case::difficulty(
        ExerciseFilter { difficulty: [Difficulty::Advanced].into(), ..ExerciseFilter::default() },
        &["Barbell Row"]
    )]
    #[case::muscle_groups(
        ExerciseFilter { muscle_groups: ["Legs", "Glutes"].into(), ..ExerciseFilter::default() },
        &["Squat"]
    )]
    #[case::no_match(
        ExerciseFilter { muscle_groups: ["Legs", "Back"].into(), ..ExerciseFilter::default() },
        &[]
    )]
    fn test_exercise_filter_filter(#[case] filter: ExerciseFilter, #[case] expected: &[&str]) {
        assert_eq!(
            filter
                .filter([SQUAT, ROW].iter())
                .iter()
                .map(|e| e.name)
                .collect::<Vec<_>>(),
            expected
        );
    }

    #[test]
    fn test_exercise_filter_exercises() {
        assert_eq!(ExerciseFilter::default().exercises().len(), 12);
        assert_eq!(
            ExerciseFilter {
                difficulty: [Difficulty::Advanced].into(),
                ..ExerciseFilter::default()
            }
            .exercises()
            .iter()
            .map(|e| e.name)
            .collect::<Vec<_>>(),
            vec!["Pull-ups", "Single-leg Deadlifts", "Burpees"]
        );
        assert_eq!(
            ExerciseFilter {
                muscle_groups: ["Cardio"].into(),
                ..ExerciseFilter::default()
            }
            .exercises()
            .iter()
            .map(|e| e.name)
            .collect::<Vec<_>>(),
            vec!["Mountain Climbers", "Burpees"]
        );
    }

    #[test]
    fn test_exercise_filter_is_empty() {
        assert!(ExerciseFilter::default().is_empty());
        assert!(
            ExerciseFilter {
                name: "  ".into(),
                ..ExerciseFilter::default()
            }
            .is_empty()
        );
        assert!(
            !ExerciseFilter {
                difficulty: [Difficulty::Beginner].into(),
                ..ExerciseFilter::default()
            }
            .is_empty()
        );
    }

    #[test]
    fn test_exercise_filter_toggle() {
        let mut filter = ExerciseFilter::default();

        filter.toggle_difficulty(Difficulty::Intermediate);
        filter.toggle_muscle_group("Core");

        assert_eq!(
            filter.difficulty_list(),
            vec![
                (Difficulty::Beginner, false),
                (Difficulty::Intermediate, true),
                (Difficulty::Advanced, false),
            ]
        );
        assert!(filter.muscle_group_list().contains(&("Core", true)));

        filter.toggle_difficulty(Difficulty::Intermediate);
        filter.toggle_muscle_group("Core");

        assert!(filter.is_empty());
    }

    #[test]
    fn test_muscle_groups() {
        assert_eq!(
            muscle_groups(),
            vec![
                "Chest",
                "Arms",
                "Core",
                "Back",
                "Shoulders",
                "Legs",
                "Glutes",
                "Cardio",
                "Full Body"
            ]
        );
    }
}
