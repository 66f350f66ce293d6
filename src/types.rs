use serde::Serialize;

/// Access tier for one run. Names that are not the reserved identity land on `Regular`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Regular,
    Admin,
    Denied,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Certificate {
    Director,
    Member,
}

impl Certificate {
    /// `None` for `Denied`: a denied run never gets a certificate.
    pub fn for_role(role: Role) -> Option<Self> {
        match role {
            Role::Admin => Some(Certificate::Director),
            Role::Regular => Some(Certificate::Member),
            Role::Denied => None,
        }
    }
}

/// Terminal state of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Outcome {
    Denied,
    Declined,
    Opened { certificate: Certificate, uri: String },
}

/// Output shape for `--report`
#[derive(Debug, Serialize)]
pub struct SessionReport<'a> {
    pub name: &'a str,
    pub role: Role,
    pub outcome: &'a Outcome,
}
