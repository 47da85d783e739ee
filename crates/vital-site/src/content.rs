//! Static page content: open roles and contact methods.

use serde::Serialize;

use vital_core::{VitalError, VitalResult};

/// An open position on the careers page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Role {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub requirements: &'static [&'static str],
}

/// The open roles, in display order.
pub static ROLES: [Role; 4] = [
    Role {
        id: "mobile-app-dev",
        title: "Mobile App Developer",
        description: "Craft revolutionary healthcare mobile experiences",
        requirements: &[
            "Expertise in React Native/Flutter",
            "Experience with FHIR/HL7 integrations",
            "Strong TypeScript knowledge",
        ],
    },
    Role {
        id: "backend-dev",
        title: "Backend Engineer",
        description: "Build secure healthcare infrastructure",
        requirements: &[
            "Spring Boot expertise",
            "Microservices architecture",
            "PostgreSQL/Redis experience",
        ],
    },
    Role {
        id: "ui-ux-designer",
        title: "UI/UX Designer",
        description: "Shape patient-centric digital experiences",
        requirements: &[
            "Figma/Adobe XD mastery",
            "Healthcare UX patterns",
            "Design system experience",
        ],
    },
    Role {
        id: "video-producer",
        title: "Medical Video Producer",
        description: "Create engaging medical education content",
        requirements: &[
            "Premiere Pro expertise",
            "Medical animation skills",
            "Script writing",
        ],
    },
];

/// Looks up an open role by id.
pub fn role(id: &str) -> VitalResult<&'static Role> {
    ROLES
        .iter()
        .find(|r| r.id == id)
        .ok_or_else(|| VitalError::UnknownRole(id.to_string()))
}

/// One way to reach the team, shown on the contact page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMethod {
    pub title: &'static str,
    pub description: &'static str,
    pub action: &'static str,
    pub action_url: &'static str,
    pub details: &'static str,
}

pub static CONTACT_METHODS: [ContactMethod; 4] = [
    ContactMethod {
        title: "Phone Support",
        description: "Available Mon-Fri, 9AM-6PM EST",
        action: "Call Us",
        action_url: "tel:+1234567890",
        details: "+1 (234) 567-890",
    },
    ContactMethod {
        title: "Email Us",
        description: "We'll respond within 24 hours",
        action: "Send Email",
        action_url: "mailto:support@nutritrack.com",
        details: "support@nutritrack.com",
    },
    ContactMethod {
        title: "Live Chat",
        description: "Get instant support from our team",
        action: "Start Chat",
        action_url: "#chat",
        details: "Available 24/7",
    },
    ContactMethod {
        title: "Visit Us",
        description: "Come see us in person",
        action: "Get Directions",
        action_url: "https://maps.google.com",
        details: "123 Health Street, CA 94105",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_lookup() {
        assert_eq!(role("backend-dev").unwrap().title, "Backend Engineer");
        let err = role("astronaut").unwrap_err();
        assert!(matches!(err, VitalError::UnknownRole(ref id) if id == "astronaut"));
    }

    #[test]
    fn test_role_ids_unique() {
        let mut ids: Vec<_> = ROLES.iter().map(|r| r.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), ROLES.len());
    }

    #[test]
    fn test_every_role_lists_requirements() {
        assert!(ROLES.iter().all(|r| !r.requirements.is_empty()));
    }

    #[test]
    fn test_contact_method_serializes_camel_case() {
        let json = serde_json::to_value(CONTACT_METHODS[0]).unwrap();
        assert_eq!(json["actionUrl"], "tel:+1234567890");
        assert_eq!(json["title"], "Phone Support");
    }
}
