//! The roster: every recruited student, in recruitment order.
//!
//! Withdrawn students stay on the roster so that their results (and, for
//! the international tier, their national-team membership) remain
//! readable, but the query helpers here only count active members unless
//! stated otherwise.

use stargazer_types::{Status, StudentId, Tier, TraitKind};
use tracing::debug;

use crate::error::RosterError;
use crate::student::Student;

/// The club's members.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    students: Vec<Student>,
}

impl Roster {
    /// An empty roster.
    pub const fn new() -> Self {
        Self {
            students: Vec::new(),
        }
    }

    /// Add a student at the end of recruitment order.
    pub fn push(&mut self, student: Student) {
        self.students.push(student);
    }

    /// Number of students, withdrawn included.
    pub fn len(&self) -> usize {
        self.students.len()
    }

    /// Whether nobody was ever recruited.
    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Every student in recruitment order.
    pub fn iter(&self) -> impl Iterator<Item = &Student> {
        self.students.iter()
    }

    /// Every student in recruitment order, mutably.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Student> {
        self.students.iter_mut()
    }

    /// Active students in recruitment order.
    pub fn active(&self) -> impl Iterator<Item = &Student> {
        self.students.iter().filter(|s| s.is_active())
    }

    /// Active students in recruitment order, mutably.
    pub fn active_mut(&mut self) -> impl Iterator<Item = &mut Student> {
        self.students.iter_mut().filter(|s| s.is_active())
    }

    /// Look up a student.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::StudentNotFound`] if `id` is not on the roster.
    pub fn get(&self, id: StudentId) -> Result<&Student, RosterError> {
        self.students
            .iter()
            .find(|s| s.id == id)
            .ok_or(RosterError::StudentNotFound(id))
    }

    /// Look up a student mutably.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::StudentNotFound`] if `id` is not on the roster.
    pub fn get_mut(&mut self, id: StudentId) -> Result<&mut Student, RosterError> {
        self.students
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(RosterError::StudentNotFound(id))
    }

    /// Number of active students.
    pub fn active_count(&self) -> usize {
        self.active().count()
    }

    /// Number of withdrawn students.
    pub fn withdrawn_count(&self) -> usize {
        self.students
            .iter()
            .filter(|s| s.status == Status::Withdrawn)
            .count()
    }

    /// Whether no active student remains.
    pub fn all_withdrawn(&self) -> bool {
        self.active().next().is_none()
    }

    /// Number of active students holding `kind`.
    pub fn count_active_with(&self, kind: TraitKind) -> usize {
        self.active().filter(|s| s.has_trait(kind)).count()
    }

    /// Whether any active student holds `kind`.
    pub fn any_active_with(&self, kind: TraitKind) -> bool {
        self.active().any(|s| s.has_trait(kind))
    }

    /// IDs of every student (withdrawn included) whose honor is `tier`.
    pub fn honored(&self, tier: Tier) -> Vec<StudentId> {
        self.students
            .iter()
            .filter(|s| s.holds_honor(tier))
            .map(|s| s.id)
            .collect()
    }

    /// Clear the honor of every active student. Returns how many were cleared.
    ///
    /// Withdrawn students keep their final honor.
    pub fn reset_honors(&mut self) -> usize {
        let mut cleared: usize = 0;
        for student in self.active_mut() {
            if student.honor.take().is_some() {
                cleared = cleared.saturating_add(1);
            }
        }
        debug!(cleared, "Annual honor reset");
        cleared
    }

    /// Drop every student's temporary contest bonuses.
    pub fn clear_boosts(&mut self) {
        for student in &mut self.students {
            student.clear_boosts();
        }
    }
}

impl FromIterator<Student> for Roster {
    fn from_iter<I: IntoIterator<Item = Student>>(iter: I) -> Self {
        Self {
            students: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn roster() -> Roster {
        let mut a = Student::uniform("Chen", 20.0);
        a.traits.push(TraitKind::CloudBringer);
        a.honor = Some(Tier::City);
        let mut b = Student::uniform("Wang", 20.0);
        b.traits.push(TraitKind::CloudBringer);
        b.status = Status::Withdrawn;
        b.honor = Some(Tier::NationalFinal);
        let c = Student::uniform("Zhao", 20.0);
        [a, b, c].into_iter().collect()
    }

    #[test]
    fn trait_queries_only_count_active_students() {
        let roster = roster();
        assert_eq!(roster.count_active_with(TraitKind::CloudBringer), 1);
        assert!(!roster.any_active_with(TraitKind::Patron));
        assert_eq!(roster.active_count(), 2);
        assert_eq!(roster.withdrawn_count(), 1);
        assert!(!roster.all_withdrawn());
    }

    #[test]
    fn honor_reset_skips_withdrawn_students() {
        let mut roster = roster();
        assert_eq!(roster.reset_honors(), 1);
        assert!(roster.active().all(|s| s.honor.is_none()));
        assert_eq!(roster.honored(Tier::NationalFinal).len(), 1);
    }

    #[test]
    fn lookup_by_id() {
        let mut roster = roster();
        let id = roster.iter().next().unwrap().id;
        assert_eq!(roster.get(id).unwrap().name, "Chen");
        roster.get_mut(id).unwrap().stress = 42.0;
        assert!(roster.get(id).unwrap().stress > 41.0);
        assert!(roster.get(StudentId::new()).is_err());
    }

    #[test]
    fn empty_roster_counts_as_fully_withdrawn() {
        assert!(Roster::new().all_withdrawn());
    }
}
