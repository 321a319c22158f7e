//! Roles and the principals that hold them.

use crate::{
    aggregation::domain::TeamSelector,
    records::domain::{ClosedEnum, ParseEnumError, TeamName},
};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Dashboard role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Sees and manages every team.
    SuperAdmin,
    /// Manages one team.
    TeamAdmin,
    /// Member of one team.
    Employee,
}

impl ClosedEnum for Role {
    const FIELD: &'static str = "role";
    const VARIANTS: &'static [Self] = &[Self::SuperAdmin, Self::TeamAdmin, Self::Employee];

    fn as_str(self) -> &'static str {
        match self {
            Self::SuperAdmin => "super_admin",
            Self::TeamAdmin => "team_admin",
            Self::Employee => "employee",
        }
    }
}

impl Role {
    /// Returns `true` for roles that administer records.
    #[must_use]
    pub const fn is_admin(self) -> bool {
        matches!(self, Self::SuperAdmin | Self::TeamAdmin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Role {
    type Error = ParseEnumError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

/// Errors returned while resolving a principal's scope.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AccessError {
    /// A team-bound role has no team.
    #[error("{name} has role {role} but no team")]
    MissingTeamScope {
        /// Principal name.
        name: String,
        /// Principal role.
        role: Role,
    },

    /// The requested scope is wider than the principal's.
    #[error("{name} may not access team scope {requested}")]
    OutOfScope {
        /// Principal name.
        name: String,
        /// Requested selector, as given.
        requested: String,
    },
}

/// An authenticated dashboard user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    name: String,
    role: Role,
    team: Option<TeamName>,
}

impl Principal {
    /// Creates a super admin.
    #[must_use]
    pub fn super_admin(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role: Role::SuperAdmin,
            team: None,
        }
    }

    /// Creates a team admin for a team.
    #[must_use]
    pub fn team_admin(name: impl Into<String>, team: TeamName) -> Self {
        Self {
            name: name.into(),
            role: Role::TeamAdmin,
            team: Some(team),
        }
    }

    /// Creates an employee of a team.
    #[must_use]
    pub fn employee(name: impl Into<String>, team: TeamName) -> Self {
        Self {
            name: name.into(),
            role: Role::Employee,
            team: Some(team),
        }
    }

    /// Creates a principal from parts as supplied by the auth collaborator.
    #[must_use]
    pub fn from_parts(name: impl Into<String>, role: Role, team: Option<TeamName>) -> Self {
        Self {
            name: name.into(),
            role,
            team,
        }
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the role.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// Returns the team, if bound to one.
    #[must_use]
    pub const fn team(&self) -> Option<&TeamName> {
        self.team.as_ref()
    }

    /// Returns the widest selector this principal may use.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::MissingTeamScope`] for a team-bound role
    /// without a team.
    pub fn scope(&self) -> Result<TeamSelector, AccessError> {
        match (self.role, &self.team) {
            (Role::SuperAdmin, _) => Ok(TeamSelector::All),
            (_, Some(team)) => Ok(TeamSelector::Team(team.clone())),
            (role, None) => Err(AccessError::MissingTeamScope {
                name: self.name.clone(),
                role,
            }),
        }
    }

    /// Narrows a requested selector to this principal's scope.
    ///
    /// Super admins get what they ask for. Team-bound principals asking for
    /// every team are pinned to their own.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::OutOfScope`] when a team-bound principal asks
    /// for another team, and [`AccessError::MissingTeamScope`] when it has no
    /// team.
    pub fn narrow(&self, requested: TeamSelector) -> Result<TeamSelector, AccessError> {
        let scope = self.scope()?;
        match requested {
            TeamSelector::All => Ok(scope),
            TeamSelector::Team(team) if scope.matches(&team) => Ok(TeamSelector::Team(team)),
            TeamSelector::Team(team) => Err(AccessError::OutOfScope {
                name: self.name.clone(),
                requested: team.to_string(),
            }),
        }
    }

    /// Returns `true` when the team is within this principal's scope.
    #[must_use]
    pub fn can_access(&self, team: &TeamName) -> bool {
        self.scope().is_ok_and(|scope| scope.matches(team))
    }
}
