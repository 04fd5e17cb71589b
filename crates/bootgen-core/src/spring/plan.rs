//! The render plan for a Spring Boot service tree

use crate::render::plan::OutputAction;
use crate::spring::config::ScaffoldConfig;

const SOURCE_DIR: &str = "src/main/groovy";
const RESOURCES_DIR: &str = "src/main/resources";
const DOCKER_DIR: &str = "src/main/docker";

/// Compute the ordered list of output actions for one scaffold run.
///
/// Pure function of the configuration: every known template asset is
/// enumerated here, with its mode, its computed destination, and the
/// feature flag gating it. The renderer never decides inclusion itself.
pub fn plan(config: &ScaffoldConfig) -> Vec<OutputAction> {
    let package_dir = config.text("packageName").replace('.', "/");
    let application_name = config.text("applicationName");

    vec![
        // gradle
        OutputAction::render("build.gradle", "build.gradle"),
        OutputAction::copy("gradlew", "gradlew"),
        OutputAction::copy("gradlew.bat", "gradlew.bat"),
        OutputAction::copy(
            "gradle/wrapper/gradle-wrapper.jar",
            "gradle/wrapper/gradle-wrapper.jar",
        ),
        OutputAction::copy(
            "gradle/wrapper/gradle-wrapper.properties",
            "gradle/wrapper/gradle-wrapper.properties",
        ),
        // app
        OutputAction::render(
            format!("{SOURCE_DIR}/Application.groovy"),
            format!("{SOURCE_DIR}/{package_dir}/{application_name}.groovy"),
        ),
        OutputAction::render(
            format!("{SOURCE_DIR}/SampleController.groovy"),
            format!("{SOURCE_DIR}/{package_dir}/SampleController.groovy"),
        )
        .include_when(config.flag("hasSample")),
        OutputAction::render(
            format!("{SOURCE_DIR}/SampleEntity.groovy"),
            format!("{SOURCE_DIR}/{package_dir}/domain/SampleEntity.groovy"),
        )
        .include_when(config.flag("jpa") && config.flag("hasSample")),
        // resources
        OutputAction::render(
            format!("{RESOURCES_DIR}/application.yml"),
            format!("{RESOURCES_DIR}/application.yml"),
        ),
        OutputAction::copy(
            format!("{RESOURCES_DIR}/keystore.jks"),
            format!("{RESOURCES_DIR}/keystore.jks"),
        )
        .include_when(config.flag("jetty")),
        // docker
        OutputAction::render(
            format!("{DOCKER_DIR}/Dockerfile"),
            format!("{DOCKER_DIR}/Dockerfile"),
        ),
        // readme
        OutputAction::render("README.md", "README.md"),
        // git
        OutputAction::copy("gitignore", ".gitignore"),
    ]
}
