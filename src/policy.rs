//! Access Control Policy
//!
//! Section-level RBAC for the admin dashboard. Every role carries its
//! allowed-section set as static data, so `can_access` is a table lookup and
//! an unlisted role cannot silently fall through to "deny everything" by
//! accident.

use crate::models::{Actor, Role, Section};

const ALL_SECTIONS: &[Section] = &Section::ALL;
const ACADEMIC_SECTIONS: &[Section] = &[Section::Overview, Section::Academics, Section::Exams];
const EVENT_SECTIONS: &[Section] = &[Section::Overview, Section::Events];
const CLUB_SECTIONS: &[Section] = &[Section::Overview, Section::Clubs];
const NEWS_SECTIONS: &[Section] = &[Section::Overview, Section::Articles];
const NO_SECTIONS: &[Section] = &[];

impl Role {
    /// The dashboard sections this role may open, in tab order.
    pub fn sections(&self) -> &'static [Section] {
        match self {
            Role::SuperAdmin => ALL_SECTIONS,
            Role::AcademicAdmin => ACADEMIC_SECTIONS,
            Role::EventAdmin => EVENT_SECTIONS,
            Role::ClubAdmin => CLUB_SECTIONS,
            Role::NewsAdmin => NEWS_SECTIONS,
            Role::Editor | Role::User => NO_SECTIONS,
        }
    }

    /// Whether this role gets a dashboard at all.
    pub fn is_admin(&self) -> bool {
        !self.sections().is_empty()
    }
}

/// can_access
///
/// Pure and deterministic: the same `(role, section)` pair always yields the
/// same answer for the lifetime of the process.
pub fn can_access(role: Role, section: Section) -> bool {
    role.sections().contains(&section)
}

/// visible_sections
///
/// Sections to render for `role`, in dashboard tab order.
pub fn visible_sections(role: Role) -> Vec<Section> {
    Section::ALL
        .into_iter()
        .filter(|section| can_access(role, *section))
        .collect()
}

/// Outcome of opening the admin dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardAccess {
    /// Open the dashboard with these sections.
    Granted(Vec<Section>),
    /// No actor, or a role without any protected section: send the caller to
    /// the login entry point.
    RedirectToLogin,
}

/// dashboard_access
///
/// Evaluated per request from the current actor; never cached across an
/// identity or role change.
pub fn dashboard_access(actor: Option<&Actor>) -> DashboardAccess {
    match actor {
        Some(actor) if actor.role.is_admin() => {
            DashboardAccess::Granted(visible_sections(actor.role))
        }
        _ => DashboardAccess::RedirectToLogin,
    }
}
