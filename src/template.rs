//! Identity of the template project being renamed.
//!
//! Everything the tool touches is named here: the placeholder token, the
//! files that carry it, and the reserved paths under the project root.

/// Placeholder name shipped with the template.
pub const BASE_TOKEN: &str = "cpp-template";

/// Files rewritten by the replacement pass, relative to the project root.
pub const TARGET_FILES: &[&str] = &[
    "CMakeLists.txt",
    "README.md",
    "vcpkg.json",
    "tests/CMakeLists.txt",
    "libs/CMakeLists.txt",
    "src/CMakeLists.txt",
    "examples/CMakeLists.txt",
    "docs/CUSTOMIZATION_GUIDE.md",
    "examples/usage_scenarios.cpp",
];

/// Primary build descriptor; its presence marks a template project.
pub const PRIMARY_BUILD_FILE: &str = "CMakeLists.txt";

/// Build descriptors discovered by the include-path scan.
pub const BUILD_FILE_NAME: &str = "CMakeLists.txt";

/// Backup directory, relative to the project root. Owned by the tool.
pub const BACKUP_DIR: &str = ".backup_placeholders";

/// Parent of the public header directory named after the project.
pub const INCLUDE_DIR: &str = "include";

/// Repository URL prefix; the project name is appended.
pub const REPOSITORY_URL_PREFIX: &str = "https://github.com/your-username/";

/// Maximum accepted project name length.
pub const MAX_NAME_LENGTH: usize = 50;

/// `include/<name>` as it appears in build descriptors.
pub fn include_ref(name: &str) -> String {
    format!("{}/{}", INCLUDE_DIR, name)
}

/// Repository URL for a project called `name`.
pub fn repository_url(name: &str) -> String {
    format!("{}{}", REPOSITORY_URL_PREFIX, name)
}
