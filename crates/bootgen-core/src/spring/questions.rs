//! The ordered question list for scaffolding a Spring Boot service

use crate::runtime::host::GitIdentity;
use crate::survey::{Answer, Choice, Question, Questionnaire};

/// Identifiers of the optional dependencies offered in the multi-choice
/// question. Each becomes a feature flag in the derived configuration.
pub const DEP_JETTY: &str = "jetty";
pub const DEP_ACTUATOR: &str = "actuator";
pub const DEP_JPA: &str = "jpa";

/// Build the questionnaire. `project_name` seeds the base-name default and
/// `git` the author defaults; both are probed before prompting starts.
pub fn questionnaire(project_name: &str, git: &GitIdentity) -> Questionnaire {
    Questionnaire::new(vec![
        Question::input(
            "organizationName",
            "What is the organization's name of the service?",
        )
        .with_default(Answer::from("acme")),
        Question::input("dockerPrefix", "What is your Docker prefix?").with_computed_default(
            |answers| Ok(Answer::Text(answers.str("organizationName")?.to_string())),
        ),
        Question::input(
            "extraMavenRepo",
            "What private Maven repository would you like to use?",
        ),
        Question::input("authorName", "What is the author's name of the service?")
            .with_default(Answer::Text(git.name.clone().unwrap_or_default())),
        Question::input("authorEmail", "What is the author's email of the service?")
            .with_default(Answer::Text(git.email.clone().unwrap_or_default())),
        Question::input("baseName", "What is the base name of the service?")
            .with_default(Answer::Text(project_name.to_string())),
        Question::input("packageName", "What is the package name of the service?")
            .with_computed_default(|answers| {
                let organization = answers.str("organizationName")?;
                let base = answers.str("baseName")?.replace('-', "");
                Ok(Answer::Text(format!("com.{organization}.{base}")))
            }),
        Question::input("description", "What is the description of the service?"),
        Question::input(
            "springBootVersion",
            "What version of Spring Boot would you like to use?",
        )
        .with_default(Answer::from("1.3.0.RELEASE")),
        Question::multi_select(
            "dependencies",
            "Select your dependencies.",
            vec![
                Choice::preselected(DEP_JETTY, "Jetty (replaces Tomcat)"),
                Choice::preselected(DEP_ACTUATOR, "Actuator"),
                Choice::new(DEP_JPA, "Data JPA"),
            ],
        ),
        Question::select(
            "databaseType",
            "Which type of database would you like to use?",
            vec![
                Choice::new("none", "None"),
                Choice::new("sql", "SQL (H2 & PostgreSQL)"),
                Choice::new("mongodb", "MongoDB"),
            ],
        )
        .with_default(Answer::Choice("sql".into()))
        .visible_when(|answers| Ok(answers.selected("dependencies", DEP_JPA))),
        Question::confirm(
            "hasSample",
            "Would you like to include a sample endpoint?",
            true,
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::survey::{collect, AcceptDefaults, FixedAnswers};

    #[test]
    fn test_questionnaire_is_valid() {
        questionnaire("widget", &GitIdentity::default())
            .validate()
            .unwrap();
    }

    #[test]
    fn test_package_name_default_combines_earlier_answers() {
        let answers = collect(
            &questionnaire("my-widget", &GitIdentity::default()),
            &mut AcceptDefaults,
        )
        .unwrap();

        assert_eq!(answers.str("packageName").unwrap(), "com.acme.mywidget");
    }

    #[test]
    fn test_database_question_requires_jpa() {
        let questionnaire = questionnaire("widget", &GitIdentity::default());

        let without_jpa = collect(&questionnaire, &mut AcceptDefaults).unwrap();
        assert!(!without_jpa.contains("databaseType"));

        let mut with_jpa = FixedAnswers::new().answer(
            "dependencies",
            Answer::Selections(vec![DEP_JETTY.into(), DEP_JPA.into()]),
        );
        let answers = collect(&questionnaire, &mut with_jpa).unwrap();
        assert_eq!(answers.str("databaseType").unwrap(), "sql");
    }

    #[test]
    fn test_git_identity_seeds_author_defaults() {
        let git = GitIdentity {
            name: Some("Dev One".into()),
            email: Some("dev@acme.com".into()),
        };
        let answers = collect(&questionnaire("widget", &git), &mut AcceptDefaults).unwrap();

        assert_eq!(answers.str("authorName").unwrap(), "Dev One");
        assert_eq!(answers.str("authorEmail").unwrap(), "dev@acme.com");
    }
}
