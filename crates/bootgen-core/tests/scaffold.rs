//! End-to-end scaffold runs: questionnaire -> answers -> config -> plan ->
//! rendered tree, over an in-memory catalog.

use bootgen_core::render::renderer;
use bootgen_core::runtime::host::GitIdentity;
use bootgen_core::spring::{self, ScaffoldConfig};
use bootgen_core::survey::{self, Answer, FixedAnswers};
use bootgen_core::TemplateStore;
use std::fs;

fn test_store() -> TemplateStore {
    TemplateStore::from_entries([
        (
            "build.gradle",
            b"// <%= description %>\nversion '<%= springBootVersion %>'\n".to_vec(),
        ),
        ("gradlew", b"#!/bin/sh\n".to_vec()),
        ("gradlew.bat", b"@rem windows wrapper\n".to_vec()),
        ("gradle/wrapper/gradle-wrapper.jar", vec![0x50, 0x4b, 0x03, 0x04]),
        (
            "gradle/wrapper/gradle-wrapper.properties",
            b"distributionUrl=gradle-bin.zip\n".to_vec(),
        ),
        (
            "src/main/groovy/Application.groovy",
            b"package <%= packageName %>\n\nclass <%= applicationName %> {}\n".to_vec(),
        ),
        (
            "src/main/groovy/SampleController.groovy",
            b"package <%= packageName %>\n\nclass SampleController {}\n".to_vec(),
        ),
        (
            "src/main/groovy/SampleEntity.groovy",
            b"package <%= packageName %>.domain\n\nclass SampleEntity {}\n".to_vec(),
        ),
        (
            "src/main/resources/application.yml",
            b"spring:\n  application:\n    name: <%= baseName %>\n".to_vec(),
        ),
        ("src/main/resources/keystore.jks", vec![0xfe, 0xed, 0xfe, 0xed]),
        (
            "src/main/docker/Dockerfile",
            b"FROM java:8\nLABEL name=<%= dockerPrefix %>/<%= baseName %>\n".to_vec(),
        ),
        ("README.md", b"# <%= baseName %>\n\n<%= description %>\n".to_vec()),
        ("gitignore", b"build/\n.gradle/\n".to_vec()),
    ])
}

fn scaffold(source: &mut FixedAnswers) -> (ScaffoldConfig, tempfile::TempDir, Vec<String>) {
    let questionnaire = spring::questionnaire("widget", &GitIdentity::default());
    questionnaire.validate().unwrap();

    let answers = survey::collect(&questionnaire, source).unwrap();
    let config = ScaffoldConfig::derive(&answers);
    let actions = spring::plan(&config);

    let dest = tempfile::tempdir().unwrap();
    let written = renderer::render(&actions, &test_store(), &config, dest.path()).unwrap();
    let relative = written
        .iter()
        .map(|p| {
            p.strip_prefix(dest.path())
                .unwrap()
                .to_string_lossy()
                .into_owned()
        })
        .collect();

    (config, dest, relative)
}

#[test]
fn default_run_scaffolds_a_jetty_service() {
    let (config, dest, written) = scaffold(&mut FixedAnswers::new());

    // Defaults: jetty + actuator selected, no jpa, sample included.
    assert!(config.flag("jetty"));
    assert!(config.flag("actuator"));
    assert!(!config.flag("jpa"));
    assert!(!config.flag("sql"));

    assert!(written.contains(&"src/main/resources/keystore.jks".to_string()));
    assert!(written.contains(&"src/main/groovy/com/acme/widget/WidgetApplication.groovy".to_string()));
    assert!(!written.iter().any(|p| p.ends_with("SampleEntity.groovy")));

    let application = fs::read_to_string(
        dest.path()
            .join("src/main/groovy/com/acme/widget/WidgetApplication.groovy"),
    )
    .unwrap();
    assert!(application.contains("package com.acme.widget"));
    assert!(application.contains("class WidgetApplication"));

    let gitignore = fs::read_to_string(dest.path().join(".gitignore")).unwrap();
    assert!(gitignore.contains("build/"));
}

#[test]
fn jpa_run_adds_the_database_question_and_entity() {
    let mut source = FixedAnswers::new()
        .answer("organizationName", Answer::from("acme"))
        .answer(
            "dependencies",
            Answer::Selections(vec!["jpa".to_string()]),
        );

    let (config, dest, written) = scaffold(&mut source);

    // The database question became visible and defaulted to sql.
    assert!(config.flag("jpa"));
    assert!(config.flag("sql"));
    assert!(!config.flag("jetty"));

    // Jetty-only keystore is out, the JPA sample entity is in.
    assert!(!written.contains(&"src/main/resources/keystore.jks".to_string()));
    let entity = dest
        .path()
        .join("src/main/groovy/com/acme/widget/domain/SampleEntity.groovy");
    assert!(entity.exists());

    let text = fs::read_to_string(entity).unwrap();
    assert!(text.contains("package com.acme.widget.domain"));
}

#[test]
fn declining_the_sample_drops_both_sample_sources() {
    let mut source = FixedAnswers::new().answer("hasSample", Answer::Flag(false));

    let (_, dest, written) = scaffold(&mut source);

    assert!(!written.iter().any(|p| p.contains("Sample")));
    assert!(!dest
        .path()
        .join("src/main/groovy/com/acme/widget/SampleController.groovy")
        .exists());
}

#[test]
fn binary_assets_are_copied_byte_for_byte() {
    let (_, dest, _) = scaffold(&mut FixedAnswers::new());

    let jar = fs::read(dest.path().join("gradle/wrapper/gradle-wrapper.jar")).unwrap();
    assert_eq!(jar, vec![0x50, 0x4b, 0x03, 0x04]);
    let keystore = fs::read(dest.path().join("src/main/resources/keystore.jks")).unwrap();
    assert_eq!(keystore, vec![0xfe, 0xed, 0xfe, 0xed]);
}

#[test]
fn overridden_answers_flow_into_rendered_text() {
    let mut source = FixedAnswers::new()
        .answer("organizationName", Answer::from("initech"))
        .answer("baseName", Answer::from("invoice-service"))
        .answer("description", Answer::from("Invoicing backend"));

    let (config, dest, _) = scaffold(&mut source);

    assert_eq!(config.text("packageName"), "com.initech.invoiceservice");
    assert_eq!(config.text("applicationName"), "InvoiceServiceApplication");

    let readme = fs::read_to_string(dest.path().join("README.md")).unwrap();
    assert!(readme.contains("# invoice-service"));
    assert!(readme.contains("Invoicing backend"));

    let dockerfile = fs::read_to_string(dest.path().join("src/main/docker/Dockerfile")).unwrap();
    assert!(dockerfile.contains("name=initech/invoice-service"));
}
