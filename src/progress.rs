use crate::models::Day;

/// Completion percentage across the whole week, rounded half-up.
/// A schedule with no exercises at all reads as 0.
pub fn week_progress(schedule: &[Day]) -> u8 {
    let total: usize = schedule.iter().map(|d| d.exercises.len()).sum();
    if total == 0 {
        return 0;
    }
    let completed = schedule
        .iter()
        .flat_map(|d| &d.exercises)
        .filter(|ex| ex.completed)
        .count();
    percent(completed, total)
}

/// Completion percentage for one day; exactly 0 for an empty exercise list.
pub fn day_progress(day: &Day) -> u8 {
    if day.exercises.is_empty() {
        return 0;
    }
    let completed = day.exercises.iter().filter(|ex| ex.completed).count();
    percent(completed, day.exercises.len())
}

pub fn is_day_complete(day: &Day) -> bool {
    day_progress(day) == 100
}

fn percent(completed: usize, total: usize) -> u8 {
    (completed as f64 / total as f64 * 100.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Day, Exercise};
    use crate::schedule::default_schedule;

    fn complete_all(day: &mut Day) {
        for ex in &mut day.exercises {
            ex.completed = true;
        }
    }

    #[test]
    fn fresh_week_is_zero() {
        assert_eq!(week_progress(&default_schedule()), 0);
    }

    #[test]
    fn fully_completed_week_is_hundred() {
        let mut schedule = default_schedule();
        for day in &mut schedule {
            complete_all(day);
        }
        assert_eq!(week_progress(&schedule), 100);
        assert!(schedule.iter().all(is_day_complete));
    }

    #[test]
    fn partial_week_stays_inside_bounds() {
        let mut schedule = default_schedule();
        schedule[0].exercises[0].completed = true;
        let p = week_progress(&schedule);
        assert!(p > 0 && p < 100);
    }

    #[test]
    fn one_of_five_monday_exercises_is_twenty_percent() {
        let mut schedule = default_schedule();
        schedule[0].exercises[0].completed = true;
        assert_eq!(day_progress(&schedule[0]), 20);
        // 27 exercises in the seed week; round(100 * 1/27) = 4.
        assert_eq!(week_progress(&schedule), 4);
    }

    #[test]
    fn all_monday_exercises_complete_the_day() {
        let mut schedule = default_schedule();
        complete_all(&mut schedule[0]);
        assert_eq!(day_progress(&schedule[0]), 100);
        assert!(is_day_complete(&schedule[0]));
    }

    #[test]
    fn rest_day_completes_like_any_other() {
        let mut schedule = default_schedule();
        let sunday = schedule.last_mut().unwrap();
        assert_eq!(sunday.exercises.len(), 2);
        complete_all(sunday);
        assert_eq!(day_progress(&schedule[6]), 100);
    }

    #[test]
    fn quotient_rounds_half_up() {
        let mut day = Day {
            id: "x".to_string(),
            label: "X".to_string(),
            focus: String::new(),
            category: Category::Strength,
            exercises: (0..8).map(|i| Exercise::new(&format!("e{i}"), "-", "-")).collect(),
        };
        day.exercises[0].completed = true;
        // 1/8 = 12.5% rounds up to 13.
        assert_eq!(day_progress(&day), 13);
    }

    #[test]
    fn empty_day_is_zero_not_an_error() {
        let day = Day {
            id: "empty".to_string(),
            label: "Empty".to_string(),
            focus: String::new(),
            category: Category::Rest,
            exercises: Vec::new(),
        };
        assert_eq!(day_progress(&day), 0);
        assert!(!is_day_complete(&day));
        assert_eq!(week_progress(&[day]), 0);
    }

    #[test]
    fn derivation_is_idempotent() {
        let mut schedule = default_schedule();
        schedule[1].exercises[2].completed = true;
        assert_eq!(week_progress(&schedule), week_progress(&schedule));
        assert_eq!(day_progress(&schedule[1]), day_progress(&schedule[1]));
    }
}
