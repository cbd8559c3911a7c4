//! Query-string round trip for shareable result links.

use url::form_urlencoded;
use url::Url;

use super::domain::{AnswerSet, IntakeDetails};

/// Query parameter name paired with the catalog question id it carries.
const ANSWER_PARAMS: [(&str, &str); 10] = [
    ("timeline", "timeline"),
    ("decision", "decisionMaking"),
    ("innovation", "innovation"),
    ("partnership", "partnership"),
    ("budget", "budget"),
    ("creative", "creative"),
    ("communication", "communication"),
    ("competitive", "competitive"),
    ("agency", "agencyIdeas"),
    ("lessons", "pastLessons"),
];

#[derive(Debug, thiserror::Error)]
pub enum ShareLinkError {
    #[error("invalid share link base url: {0}")]
    InvalidBase(#[from] url::ParseError),
    #[error("shared link is missing required parameter '{0}'")]
    MissingParameter(&'static str),
}

/// Intake details and answers carried by a shared link.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SharedResult {
    pub intake: IntakeDetails,
    pub answers: AnswerSet,
}

impl SharedResult {
    pub fn new(intake: IntakeDetails, answers: AnswerSet) -> Self {
        Self { intake, answers }
    }

    /// A link can open straight into results once it names the respondent and
    /// carries the first answer.
    pub fn is_loadable(&self) -> bool {
        !self.intake.name.is_empty() && self.answers.is_answered("timeline")
    }

    pub fn require_loadable(self) -> Result<Self, ShareLinkError> {
        if self.intake.name.is_empty() {
            return Err(ShareLinkError::MissingParameter("name"));
        }
        if !self.answers.is_answered("timeline") {
            return Err(ShareLinkError::MissingParameter("timeline"));
        }
        Ok(self)
    }

    pub fn to_query(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());

        for (param, value) in [
            ("name", &self.intake.name),
            ("org", &self.intake.organization),
            ("role", &self.intake.role),
        ] {
            if !value.is_empty() {
                serializer.append_pair(param, value);
            }
        }

        for (param, question_id) in ANSWER_PARAMS {
            if let Some(value) = self.answers.get(question_id) {
                serializer.append_pair(param, value);
            }
        }

        serializer.finish()
    }

    pub fn to_url(&self, base: &str) -> Result<Url, ShareLinkError> {
        let mut url = Url::parse(base)?;
        url.set_query(Some(&self.to_query()));
        Ok(url)
    }

    /// Decode a query string, with or without the leading `?`.
    ///
    /// Unknown parameters are ignored; the last occurrence of a repeated
    /// parameter wins.
    pub fn from_query(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut shared = Self::default();

        for (param, value) in form_urlencoded::parse(query.as_bytes()) {
            let value = value.into_owned();
            match param.as_ref() {
                "name" => shared.intake.name = value,
                "org" => shared.intake.organization = value,
                "role" => shared.intake.role = value,
                other => {
                    if let Some((_, question_id)) =
                        ANSWER_PARAMS.iter().find(|(name, _)| *name == other)
                    {
                        shared.answers.record(*question_id, value);
                    }
                }
            }
        }

        shared
    }

    pub fn from_url(url: &Url) -> Self {
        Self::from_query(url.query().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shared() -> SharedResult {
        let intake = IntakeDetails {
            name: "Ada Byron".to_string(),
            organization: "Analytical & Co".to_string(),
            role: "CMO".to_string(),
        };
        let answers: AnswerSet = [
            ("timeline", "kpis"),
            ("decisionMaking", "data"),
            ("innovation", "test"),
            ("partnership", "optimization"),
            ("budget", "performance"),
            ("creative", "conversion"),
            ("communication", "dashboards"),
            ("competitive", "metrics"),
            ("agencyIdeas", "optimization"),
            ("pastLessons", "performance"),
        ]
        .into_iter()
        .collect();
        SharedResult::new(intake, answers)
    }

    #[test]
    fn query_round_trip_preserves_known_fields() {
        let original = shared();
        let decoded = SharedResult::from_query(&original.to_query());
        assert_eq!(decoded, original);
    }

    #[test]
    fn encodes_short_parameter_names() {
        let query = shared().to_query();
        assert!(query.starts_with("name=Ada+Byron&org=Analytical+%26+Co&role=CMO"));
        assert!(query.contains("decision=data"));
        assert!(query.contains("agency=optimization"));
        assert!(query.contains("lessons=performance"));
        assert!(!query.contains("decisionMaking"));
    }

    #[test]
    fn ignores_unknown_parameters_and_leading_question_mark() {
        let decoded = SharedResult::from_query("?name=Sam&timeline=strategic&utm_source=mail");
        assert_eq!(decoded.intake.name, "Sam");
        assert_eq!(decoded.answers.get("timeline"), Some("strategic"));
        assert_eq!(decoded.answers.len(), 1);
        assert!(decoded.is_loadable());
    }

    #[test]
    fn requires_name_and_timeline_to_load() {
        let missing_timeline = SharedResult::from_query("name=Sam&budget=planned");
        assert!(!missing_timeline.is_loadable());
        assert!(matches!(
            missing_timeline.require_loadable(),
            Err(ShareLinkError::MissingParameter("timeline"))
        ));

        let missing_name = SharedResult::from_query("timeline=kpis");
        assert!(matches!(
            missing_name.require_loadable(),
            Err(ShareLinkError::MissingParameter("name"))
        ));
    }

    #[test]
    fn builds_full_url_from_base() {
        let url = shared()
            .to_url("https://fit.example.com/results")
            .expect("valid base");
        assert_eq!(url.path(), "/results");
        assert_eq!(SharedResult::from_url(&url), shared());
    }
}
