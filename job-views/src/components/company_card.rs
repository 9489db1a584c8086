use std::fmt::{self, Display};

use job_api::Company;

use crate::display::{avatar_initial, avatar_style, shorten_url, AvatarStyle};

/// A logo when the company has one, the coloured initial otherwise
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompanyAvatar {
    Logo { url: String, alt: String },
    Initial { initial: String, style: AvatarStyle },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyCard {
    pub id: i64,
    pub name: String,
    pub avatar: CompanyAvatar,
    pub career_page_url: String,
    pub short_url: String,
}

impl From<&Company> for CompanyCard {
    fn from(company: &Company) -> Self {
        let avatar = match company.logo_url.as_deref().filter(|u| !u.is_empty()) {
            Some(url) => CompanyAvatar::Logo {
                url: url.to_owned(),
                alt: format!("{} logo", company.name),
            },
            None => CompanyAvatar::Initial {
                initial: avatar_initial(&company.name),
                style: avatar_style(&company.name),
            },
        };
        Self {
            id: company.id,
            name: company.name.clone(),
            avatar,
            career_page_url: company.career_page_url.clone(),
            short_url: shorten_url(&company.career_page_url),
        }
    }
}

impl Display for CompanyCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let initial = match &self.avatar {
            CompanyAvatar::Logo { .. } => "*".to_owned(),
            CompanyAvatar::Initial { initial, .. } => initial.clone(),
        };
        write!(f, "[{}] {} ({})", initial, self.name, self.short_url)
    }
}
