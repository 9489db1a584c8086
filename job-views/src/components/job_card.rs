use std::fmt::{self, Display};

use job_api::Job;

use crate::display::{avatar_initial, avatar_style, badge_kind, format_date, AvatarStyle, BadgeKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Badge {
    Location(String),
    EmploymentType { label: String, kind: BadgeKind },
}

/// Everything a job card shows, derived from a single [`Job`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobCard {
    pub id: i64,
    pub title: String,
    pub company_name: String,
    pub avatar: AvatarStyle,
    pub initial: String,
    pub badges: Vec<Badge>,
    /// formatted `last_seen_at`
    pub last_seen: String,
    pub apply_url: String,
}

impl From<&Job> for JobCard {
    fn from(job: &Job) -> Self {
        let mut badges = Vec::with_capacity(2);
        if let Some(location) = job.location.as_deref().filter(|l| !l.is_empty()) {
            badges.push(Badge::Location(location.to_owned()));
        }
        if let Some(employment_type) = job.employment_type.as_deref().filter(|t| !t.is_empty()) {
            badges.push(Badge::EmploymentType {
                label: employment_type.to_owned(),
                kind: badge_kind(employment_type),
            });
        }
        Self {
            id: job.id,
            title: job.title.clone(),
            company_name: job.company.name.clone(),
            avatar: avatar_style(&job.company.name),
            initial: avatar_initial(&job.company.name),
            badges,
            last_seen: format_date(&job.last_seen_at),
            apply_url: job.job_url.clone(),
        }
    }
}

impl Display for JobCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[{}] {}", self.initial, self.title)?;
        writeln!(f, "    {}", self.company_name)?;
        let badges = self
            .badges
            .iter()
            .map(|badge| match badge {
                Badge::Location(location) => format!("@ {}", location),
                Badge::EmploymentType { label, .. } => format!("<{}>", label),
            })
            .collect::<Vec<_>>();
        if !badges.is_empty() {
            writeln!(f, "    {}", badges.join("  "))?;
        }
        write!(f, "    seen {} | Apply: {}", self.last_seen, self.apply_url)
    }
}
