//! Progress tracking over a curriculum's prerequisite graph
//!
//! The tracker owns the two mutable sets of a session (completed and
//! in-progress course codes) and applies every state transition through
//! explicit command handlers: `toggle_completion`, `toggle_in_progress`,
//! and `toggle_semester`. Presentation layers forward gestures to these
//! handlers and re-read the derived queries on every render; the tracker
//! itself knows nothing about any UI.
//!
//! Invariants maintained across all operations:
//! - a code is never in `completed` and `in_progress` at the same time;
//! - a code enters `completed` only while all of its prerequisites are in
//!   `completed`.

use crate::core::models::{Course, Curriculum, Dag};
use std::collections::{HashMap, HashSet};

/// Display status of a single course, derived from the tracker state.
///
/// Collapses the per-course query results into the one value a renderer
/// needs. Precedence mirrors the query order in [`ProgressTracker::status_of`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CourseStatus {
    /// The course has been completed
    Completed,
    /// The course is currently being taken
    InProgress,
    /// Blocked: every prerequisite is completed or in progress, and at
    /// least one is still in progress
    Blocked,
    /// All prerequisites completed (or none); can be taken now
    Unlocked,
    /// At least one prerequisite is not completed
    Locked,
}

/// Session-scoped progress state over one loaded curriculum.
///
/// Built once per session from a read-only [`Curriculum`]; holds the reverse
/// prerequisite graph and a credit lookup so operations never need the
/// curriculum again. State starts empty and is never persisted.
#[derive(Debug, Clone)]
pub struct ProgressTracker {
    /// Prerequisite graph over the whole curriculum
    graph: Dag,
    /// Credit weight per course code
    credits: HashMap<String, f32>,
    /// Codes of completed courses
    completed: HashSet<String>,
    /// Codes of courses currently being taken
    in_progress: HashSet<String>,
}

impl ProgressTracker {
    /// Create an empty tracker for a curriculum
    #[must_use]
    pub fn new(curriculum: &Curriculum) -> Self {
        let graph = curriculum.build_dag();
        let credits = curriculum
            .courses()
            .map(|c| (c.code.clone(), c.credits))
            .collect();

        Self {
            graph,
            credits,
            completed: HashSet::new(),
            in_progress: HashSet::new(),
        }
    }

    /// Codes of all completed courses
    #[must_use]
    pub const fn completed(&self) -> &HashSet<String> {
        &self.completed
    }

    /// Codes of all in-progress courses
    #[must_use]
    pub const fn in_progress(&self) -> &HashSet<String> {
        &self.in_progress
    }

    /// Whether a course code is marked completed
    #[must_use]
    pub fn is_completed(&self, code: &str) -> bool {
        self.completed.contains(code)
    }

    /// Whether a course code is marked in progress
    #[must_use]
    pub fn is_in_progress(&self, code: &str) -> bool {
        self.in_progress.contains(code)
    }

    /// Whether a course can be taken: its prerequisite list is empty, or
    /// every prerequisite code is completed. Pure query, no side effects.
    #[must_use]
    pub fn is_unlocked(&self, course: &Course) -> bool {
        course
            .prerequisites
            .iter()
            .all(|p| self.completed.contains(p))
    }

    /// Full transitive closure of courses that require `code`, directly or
    /// through a chain of prerequisites. Returned as a set; the course
    /// itself is not included.
    #[must_use]
    pub fn dependents_of(&self, code: &str) -> HashSet<String> {
        self.graph.transitive_dependents(code)
    }

    /// Apply the primary gesture to a course.
    ///
    /// - Completed course: un-complete it, cascading to every transitive
    ///   dependent (a course cannot stay completed once one of its
    ///   prerequisites is not). The code is also dropped from the
    ///   in-progress set, which should not normally contain it.
    /// - In-progress course: cancel the in-progress mark. The gesture does
    ///   not promote to completed.
    /// - Otherwise: complete the course if it is unlocked; locked courses
    ///   are silently left untouched.
    pub fn toggle_completion(&mut self, course: &Course) {
        if self.completed.contains(&course.code) {
            let dependents = self.graph.transitive_dependents(&course.code);
            self.completed.remove(&course.code);
            for dep in &dependents {
                self.completed.remove(dep);
            }
            self.in_progress.remove(&course.code);
        } else if self.in_progress.remove(&course.code) {
            // cancelled in-progress; nothing else changes
        } else if self.is_unlocked(course) {
            self.completed.insert(course.code.clone());
        }
    }

    /// Apply the secondary gesture to a course: toggle its in-progress mark.
    ///
    /// No-op when the course is already completed; a completed course cannot
    /// be marked in progress.
    pub fn toggle_in_progress(&mut self, course: &Course) {
        if self.completed.contains(&course.code) {
            return;
        }
        if !self.in_progress.remove(&course.code) {
            self.in_progress.insert(course.code.clone());
        }
    }

    /// Apply the semester button to a semester's course list.
    ///
    /// Acts only on the unlocked subset of `courses`. When that subset is
    /// fully completed the whole subset plus its transitive dependents is
    /// un-completed; otherwise every unlocked course not yet completed is
    /// completed. An empty unlocked subset vacuously counts as fully
    /// completed and falls through the un-complete branch as a no-op.
    pub fn toggle_semester(&mut self, courses: &[Course]) {
        let unlocked: Vec<&Course> = courses.iter().filter(|c| self.is_unlocked(c)).collect();

        let all_completed = unlocked.iter().all(|c| self.completed.contains(&c.code));

        if all_completed {
            let mut removal: HashSet<String> = HashSet::new();
            for course in &unlocked {
                removal.insert(course.code.clone());
                removal.extend(self.graph.transitive_dependents(&course.code));
            }
            for code in &removal {
                self.completed.remove(code);
            }
        } else {
            for course in &unlocked {
                if self.completed.insert(course.code.clone()) {
                    self.in_progress.remove(&course.code);
                }
            }
        }
    }

    /// Whether a course is in the blocked state: it has at least one
    /// prerequisite, every prerequisite is completed or in progress, and at
    /// least one is still in progress. Such a course stays locked for both
    /// completion and in-progress marking until the pending prerequisite is
    /// resolved.
    #[must_use]
    pub fn is_blocked_by_in_progress(&self, course: &Course) -> bool {
        !course.prerequisites.is_empty()
            && course
                .prerequisites
                .iter()
                .all(|p| self.completed.contains(p) || self.in_progress.contains(p))
            && course
                .prerequisites
                .iter()
                .any(|p| self.in_progress.contains(p))
    }

    /// Whether the secondary gesture may act on the course: unlocked, not
    /// completed, and not blocked on an in-progress prerequisite.
    #[must_use]
    pub fn is_eligible_for_course_toggle(&self, course: &Course) -> bool {
        self.is_unlocked(course)
            && !self.completed.contains(&course.code)
            && !self.is_blocked_by_in_progress(course)
    }

    /// Collapse the per-course queries into a single display status
    #[must_use]
    pub fn status_of(&self, course: &Course) -> CourseStatus {
        if self.completed.contains(&course.code) {
            CourseStatus::Completed
        } else if self.in_progress.contains(&course.code) {
            CourseStatus::InProgress
        } else if self.is_blocked_by_in_progress(course) {
            CourseStatus::Blocked
        } else if self.is_unlocked(course) {
            CourseStatus::Unlocked
        } else {
            CourseStatus::Locked
        }
    }

    /// Whether every course in the list is unlocked. The semester button is
    /// only enabled when this holds for the whole semester.
    #[must_use]
    pub fn is_semester_fully_unlocked(&self, courses: &[Course]) -> bool {
        courses.iter().all(|c| self.is_unlocked(c))
    }

    /// Whether the unlocked subset of the list is non-empty and fully
    /// completed (the semester button's "completed" label state)
    #[must_use]
    pub fn is_semester_completed(&self, courses: &[Course]) -> bool {
        let unlocked: Vec<&Course> = courses.iter().filter(|c| self.is_unlocked(c)).collect();
        !unlocked.is_empty() && unlocked.iter().all(|c| self.completed.contains(&c.code))
    }

    /// Sum of credit weights over all in-progress courses
    #[must_use]
    pub fn credits_in_progress(&self) -> f32 {
        self.in_progress
            .iter()
            .filter_map(|code| self.credits.get(code))
            .fold(0.0, |acc, c| acc + c)
    }

    /// Sum of credit weights over all completed courses
    #[must_use]
    pub fn credits_completed(&self) -> f32 {
        self.completed
            .iter()
            .filter_map(|code| self.credits.get(code))
            .fold(0.0, |acc, c| acc + c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{Semester, YearGroup};

    fn course(code: &str, credits: f32, prereqs: &[&str]) -> Course {
        let mut c = Course::new(code.to_string(), format!("Course {code}"), credits);
        for p in prereqs {
            c.add_prerequisite((*p).to_string());
        }
        c
    }

    fn curriculum_of(semesters: Vec<Vec<Course>>) -> Curriculum {
        let mut curriculum = Curriculum::new("Test".to_string());
        let semesters = semesters
            .into_iter()
            .enumerate()
            .map(|(idx, courses)| {
                let mut sem = Semester::new(u32::try_from(idx).unwrap() + 1);
                for c in courses {
                    sem.add_course(c);
                }
                sem
            })
            .collect();
        curriculum.years.push(YearGroup { semesters });
        curriculum
    }

    /// A -> B -> C chain plus an independent course X.
    fn chain_curriculum() -> Curriculum {
        curriculum_of(vec![
            vec![course("A", 6.0, &[]), course("X", 3.0, &[])],
            vec![course("B", 5.0, &["A"])],
            vec![course("C", 4.0, &["B"])],
        ])
    }

    #[test]
    fn no_prerequisites_always_unlocked() {
        let curriculum = chain_curriculum();
        let tracker = ProgressTracker::new(&curriculum);
        let a = curriculum.get_course("A").unwrap();
        let x = curriculum.get_course("X").unwrap();

        assert!(tracker.is_unlocked(a));
        assert!(tracker.is_unlocked(x));
    }

    #[test]
    fn unlocked_iff_all_prerequisites_completed() {
        let curriculum = curriculum_of(vec![
            vec![course("A", 6.0, &[]), course("B", 6.0, &[])],
            vec![course("C", 5.0, &["A", "B"])],
        ]);
        let mut tracker = ProgressTracker::new(&curriculum);
        let a = curriculum.get_course("A").unwrap();
        let b = curriculum.get_course("B").unwrap();
        let c = curriculum.get_course("C").unwrap();

        assert!(!tracker.is_unlocked(c));
        tracker.toggle_completion(a);
        assert!(!tracker.is_unlocked(c));
        tracker.toggle_completion(b);
        assert!(tracker.is_unlocked(c));
    }

    #[test]
    fn toggle_completion_on_off_symmetry() {
        let curriculum = chain_curriculum();
        let mut tracker = ProgressTracker::new(&curriculum);
        let a = curriculum.get_course("A").unwrap();

        tracker.toggle_completion(a);
        assert!(tracker.is_completed("A"));
        tracker.toggle_completion(a);
        assert!(!tracker.is_completed("A"));
        assert!(tracker.completed().is_empty());
    }

    #[test]
    fn locked_course_completion_is_silently_rejected() {
        let curriculum = chain_curriculum();
        let mut tracker = ProgressTracker::new(&curriculum);
        let c = curriculum.get_course("C").unwrap();

        tracker.toggle_completion(c);
        assert!(!tracker.is_completed("C"));
        assert!(tracker.completed().is_empty());
    }

    #[test]
    fn cascading_uncompletion_removes_transitive_dependents() {
        let curriculum = chain_curriculum();
        let mut tracker = ProgressTracker::new(&curriculum);
        let a = curriculum.get_course("A").unwrap();
        let b = curriculum.get_course("B").unwrap();
        let c = curriculum.get_course("C").unwrap();

        tracker.toggle_completion(a);
        tracker.toggle_completion(b);
        tracker.toggle_completion(c);
        assert_eq!(tracker.completed().len(), 3);

        tracker.toggle_completion(a);
        assert!(!tracker.is_completed("A"));
        assert!(!tracker.is_completed("B"));
        assert!(!tracker.is_completed("C"));
    }

    #[test]
    fn cascade_leaves_unrelated_courses_alone() {
        let curriculum = chain_curriculum();
        let mut tracker = ProgressTracker::new(&curriculum);
        let a = curriculum.get_course("A").unwrap();
        let b = curriculum.get_course("B").unwrap();
        let x = curriculum.get_course("X").unwrap();

        tracker.toggle_completion(a);
        tracker.toggle_completion(b);
        tracker.toggle_completion(x);

        tracker.toggle_completion(a);
        assert!(tracker.is_completed("X"));
        assert_eq!(tracker.completed().len(), 1);
    }

    #[test]
    fn primary_gesture_cancels_in_progress_instead_of_completing() {
        let curriculum = chain_curriculum();
        let mut tracker = ProgressTracker::new(&curriculum);
        let a = curriculum.get_course("A").unwrap();

        tracker.toggle_in_progress(a);
        assert!(tracker.is_in_progress("A"));

        tracker.toggle_completion(a);
        assert!(!tracker.is_in_progress("A"));
        assert!(!tracker.is_completed("A"));
    }

    #[test]
    fn in_progress_toggle_is_a_toggle() {
        let curriculum = chain_curriculum();
        let mut tracker = ProgressTracker::new(&curriculum);
        let a = curriculum.get_course("A").unwrap();

        tracker.toggle_in_progress(a);
        assert!(tracker.is_in_progress("A"));
        tracker.toggle_in_progress(a);
        assert!(!tracker.is_in_progress("A"));
    }

    #[test]
    fn completed_course_cannot_be_marked_in_progress() {
        let curriculum = chain_curriculum();
        let mut tracker = ProgressTracker::new(&curriculum);
        let a = curriculum.get_course("A").unwrap();

        tracker.toggle_completion(a);
        tracker.toggle_in_progress(a);

        assert!(tracker.is_completed("A"));
        assert!(!tracker.is_in_progress("A"));
    }

    #[test]
    fn completed_and_in_progress_stay_disjoint() {
        let curriculum = chain_curriculum();
        let mut tracker = ProgressTracker::new(&curriculum);
        let a = curriculum.get_course("A").unwrap();
        let b = curriculum.get_course("B").unwrap();
        let x = curriculum.get_course("X").unwrap();

        tracker.toggle_in_progress(x);
        tracker.toggle_completion(a);
        tracker.toggle_in_progress(b);
        tracker.toggle_completion(b);
        tracker.toggle_completion(b);
        tracker.toggle_completion(a);

        let overlap: Vec<_> = tracker
            .completed()
            .intersection(tracker.in_progress())
            .collect();
        assert!(overlap.is_empty());
    }

    #[test]
    fn blocked_state_requires_pending_prerequisite() {
        let curriculum = curriculum_of(vec![
            vec![course("A", 6.0, &[]), course("B", 6.0, &[])],
            vec![course("D", 5.0, &["A", "B"])],
        ]);
        let mut tracker = ProgressTracker::new(&curriculum);
        let a = curriculum.get_course("A").unwrap();
        let b = curriculum.get_course("B").unwrap();
        let d = curriculum.get_course("D").unwrap();

        // Nothing marked: not blocked, just locked
        assert!(!tracker.is_blocked_by_in_progress(d));

        // A completed, B in progress: blocked
        tracker.toggle_completion(a);
        tracker.toggle_in_progress(b);
        assert!(tracker.is_blocked_by_in_progress(d));
        assert_eq!(tracker.status_of(d), CourseStatus::Blocked);

        // B resolved to completed: unlocked, no longer blocked
        tracker.toggle_in_progress(b);
        tracker.toggle_completion(b);
        assert!(!tracker.is_blocked_by_in_progress(d));
        assert!(tracker.is_unlocked(d));
    }

    #[test]
    fn blocked_course_cannot_be_completed() {
        let curriculum = curriculum_of(vec![
            vec![course("A", 6.0, &[])],
            vec![course("D", 5.0, &["A"])],
        ]);
        let mut tracker = ProgressTracker::new(&curriculum);
        let a = curriculum.get_course("A").unwrap();
        let d = curriculum.get_course("D").unwrap();

        tracker.toggle_in_progress(a);
        assert!(tracker.is_blocked_by_in_progress(d));

        tracker.toggle_completion(d);
        assert!(!tracker.is_completed("D"));
    }

    #[test]
    fn blocked_course_is_not_eligible_for_toggle() {
        let curriculum = curriculum_of(vec![
            vec![course("A", 6.0, &[])],
            vec![course("D", 5.0, &["A"])],
        ]);
        let mut tracker = ProgressTracker::new(&curriculum);
        let a = curriculum.get_course("A").unwrap();
        let d = curriculum.get_course("D").unwrap();

        tracker.toggle_in_progress(a);
        assert!(!tracker.is_eligible_for_course_toggle(d));

        // A itself is unlocked, not completed, not blocked: eligible
        assert!(tracker.is_eligible_for_course_toggle(a));
    }

    #[test]
    fn eligibility_excludes_completed_courses() {
        let curriculum = chain_curriculum();
        let mut tracker = ProgressTracker::new(&curriculum);
        let a = curriculum.get_course("A").unwrap();

        tracker.toggle_completion(a);
        assert!(!tracker.is_eligible_for_course_toggle(a));
    }

    #[test]
    fn semester_toggle_completes_unlocked_subset_only() {
        let curriculum = curriculum_of(vec![vec![
            course("A", 6.0, &[]),
            course("B", 6.0, &[]),
            course("L", 5.0, &["Z"]),
        ]]);
        let mut tracker = ProgressTracker::new(&curriculum);
        let sem = curriculum.semester_at(1).unwrap();

        tracker.toggle_semester(&sem.courses);

        assert!(tracker.is_completed("A"));
        assert!(tracker.is_completed("B"));
        assert!(!tracker.is_completed("L"));
    }

    #[test]
    fn semester_toggle_twice_restores_original_state() {
        let curriculum = chain_curriculum();
        let mut tracker = ProgressTracker::new(&curriculum);
        let sem = curriculum.semester_at(1).unwrap();

        tracker.toggle_semester(&sem.courses);
        assert!(tracker.is_completed("A"));
        assert!(tracker.is_completed("X"));

        tracker.toggle_semester(&sem.courses);
        assert!(tracker.completed().is_empty());
    }

    #[test]
    fn semester_uncomplete_cascades_into_later_semesters() {
        let curriculum = chain_curriculum();
        let mut tracker = ProgressTracker::new(&curriculum);
        let a = curriculum.get_course("A").unwrap();
        let b = curriculum.get_course("B").unwrap();
        let x = curriculum.get_course("X").unwrap();
        let first = curriculum.semester_at(1).unwrap();

        tracker.toggle_completion(a);
        tracker.toggle_completion(x);
        tracker.toggle_completion(b);

        // First semester fully completed: the button un-completes it and
        // drags B (a dependent of A) along
        tracker.toggle_semester(&first.courses);
        assert!(tracker.completed().is_empty());
    }

    #[test]
    fn semester_toggle_with_nothing_unlocked_is_a_noop() {
        let curriculum = curriculum_of(vec![
            vec![course("A", 6.0, &[])],
            vec![course("B", 5.0, &["A"]), course("C", 5.0, &["A"])],
        ]);
        let mut tracker = ProgressTracker::new(&curriculum);
        let second = curriculum.semester_at(2).unwrap();

        // Nothing in the second semester is unlocked; the vacuous
        // un-complete branch must change nothing
        tracker.toggle_semester(&second.courses);
        assert!(tracker.completed().is_empty());
        assert!(tracker.in_progress().is_empty());
    }

    #[test]
    fn semester_complete_pass_clears_in_progress_marks() {
        let curriculum = chain_curriculum();
        let mut tracker = ProgressTracker::new(&curriculum);
        let a = curriculum.get_course("A").unwrap();
        let first = curriculum.semester_at(1).unwrap();

        tracker.toggle_in_progress(a);
        tracker.toggle_semester(&first.courses);

        assert!(tracker.is_completed("A"));
        assert!(!tracker.is_in_progress("A"));
    }

    #[test]
    fn semester_button_queries() {
        let curriculum = chain_curriculum();
        let mut tracker = ProgressTracker::new(&curriculum);
        let a = curriculum.get_course("A").unwrap();
        let first = curriculum.semester_at(1).unwrap();
        let second = curriculum.semester_at(2).unwrap();

        assert!(tracker.is_semester_fully_unlocked(&first.courses));
        assert!(!tracker.is_semester_fully_unlocked(&second.courses));
        assert!(!tracker.is_semester_completed(&first.courses));

        tracker.toggle_semester(&first.courses);
        assert!(tracker.is_semester_completed(&first.courses));
        assert!(tracker.is_semester_fully_unlocked(&second.courses));

        tracker.toggle_completion(a);
        assert!(!tracker.is_semester_completed(&first.courses));
    }

    #[test]
    fn credits_in_progress_tracks_every_mutation() {
        let curriculum = chain_curriculum();
        let mut tracker = ProgressTracker::new(&curriculum);
        let a = curriculum.get_course("A").unwrap();
        let x = curriculum.get_course("X").unwrap();

        assert!(tracker.credits_in_progress().abs() < f32::EPSILON);

        tracker.toggle_in_progress(a);
        assert!((tracker.credits_in_progress() - 6.0).abs() < f32::EPSILON);

        tracker.toggle_in_progress(x);
        assert!((tracker.credits_in_progress() - 9.0).abs() < f32::EPSILON);

        tracker.toggle_in_progress(a);
        assert!((tracker.credits_in_progress() - 3.0).abs() < f32::EPSILON);

        tracker.toggle_completion(x);
        assert!(tracker.credits_in_progress().abs() < f32::EPSILON);
    }

    #[test]
    fn credits_completed_sums_completed_courses() {
        let curriculum = chain_curriculum();
        let mut tracker = ProgressTracker::new(&curriculum);
        let a = curriculum.get_course("A").unwrap();
        let b = curriculum.get_course("B").unwrap();

        tracker.toggle_completion(a);
        tracker.toggle_completion(b);
        assert!((tracker.credits_completed() - 11.0).abs() < f32::EPSILON);
    }

    #[test]
    fn dependents_of_matches_graph_closure() {
        let curriculum = chain_curriculum();
        let tracker = ProgressTracker::new(&curriculum);

        let deps = tracker.dependents_of("A");
        let expected: HashSet<String> = ["B", "C"].iter().map(|s| (*s).to_string()).collect();
        assert_eq!(deps, expected);
    }

    #[test]
    fn status_precedence() {
        let curriculum = curriculum_of(vec![
            vec![course("A", 6.0, &[])],
            vec![course("B", 5.0, &["A"])],
        ]);
        let mut tracker = ProgressTracker::new(&curriculum);
        let a = curriculum.get_course("A").unwrap();
        let b = curriculum.get_course("B").unwrap();

        assert_eq!(tracker.status_of(a), CourseStatus::Unlocked);
        assert_eq!(tracker.status_of(b), CourseStatus::Locked);

        tracker.toggle_in_progress(a);
        assert_eq!(tracker.status_of(a), CourseStatus::InProgress);
        assert_eq!(tracker.status_of(b), CourseStatus::Blocked);

        tracker.toggle_in_progress(a);
        tracker.toggle_completion(a);
        assert_eq!(tracker.status_of(a), CourseStatus::Completed);
        assert_eq!(tracker.status_of(b), CourseStatus::Unlocked);
    }
}
