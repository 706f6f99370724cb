use assert_cmd::cargo::cargo_bin_cmd;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// The nine files rewritten by the tool, with template content.
pub const TEMPLATE_FILES: &[(&str, &str)] = &[
    (
        "CMakeLists.txt",
        "cmake_minimum_required(VERSION 3.20)\n\
         project(cpp-template VERSION 1.0.0)\n\
         set(CPP_TEMPLATE_BUILD_TESTS ON)\n\
         add_library(cpp_template INTERFACE)\n\
         target_include_directories(cpp_template INTERFACE include/cpp-template)\n",
    ),
    (
        "README.md",
        "# cpp-template\n\n\
         Clone from https://github.com/your-username/cpp-template\n\n\
         Use `CppTemplate::run()` from namespace `cpp_template`.\n",
    ),
    (
        "vcpkg.json",
        "{\n  \"name\": \"cpp-template\",\n  \"version\": \"1.0.0\"\n}\n",
    ),
    (
        "tests/CMakeLists.txt",
        "add_executable(cpp-template-tests test_core.cpp)\n",
    ),
    (
        "libs/CMakeLists.txt",
        "add_subdirectory(core)\n",
    ),
    (
        "src/CMakeLists.txt",
        "add_executable(cpp-template main.cpp)\n",
    ),
    (
        "examples/CMakeLists.txt",
        "add_executable(usage_scenarios usage_scenarios.cpp)\n\
         target_link_libraries(usage_scenarios cpp_template)\n",
    ),
    (
        "docs/CUSTOMIZATION_GUIDE.md",
        "Rename CPP-TEMPLATE and CPP_TEMPLATE macros after cloning.\n",
    ),
    (
        "examples/usage_scenarios.cpp",
        "#include <cpp-template/core.h>\n\
         int main() { cpp_template::CppTemplate app; return app.run(); }\n",
    ),
];

/// Creates a template project with every target file, the public header
/// directory, and a nested build file outside the target list.
#[allow(unused)]
pub fn create_template_project() -> TempDir {
    let temp = TempDir::new().unwrap();

    for (rel, content) in TEMPLATE_FILES {
        write_file(temp.path(), rel, content);
    }

    write_file(
        temp.path(),
        "include/cpp-template/core.h",
        "#pragma once\nnamespace cpp_template {}\n",
    );
    write_file(
        temp.path(),
        "libs/core/CMakeLists.txt",
        "target_include_directories(core PUBLIC ${PROJECT_SOURCE_DIR}/include/cpp-template)\n",
    );

    temp
}

#[allow(unused)]
pub fn write_file(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

#[allow(unused)]
pub fn read_file(root: &Path, rel: &str) -> String {
    fs::read_to_string(root.join(rel)).unwrap()
}

/// Snapshot of every regular file under `root`, sorted by relative path.
#[allow(unused)]
pub fn tree_snapshot(root: &Path) -> Vec<(PathBuf, Vec<u8>)> {
    fn walk(root: &Path, dir: &Path, out: &mut Vec<(PathBuf, Vec<u8>)>) {
        for entry in fs::read_dir(dir).unwrap() {
            let path = entry.unwrap().path();
            if path.is_dir() {
                walk(root, &path, out);
            } else {
                let rel = path.strip_prefix(root).unwrap().to_path_buf();
                out.push((rel, fs::read(&path).unwrap()));
            }
        }
    }

    let mut out = Vec::new();
    walk(root, root, &mut out);
    out.sort();
    out
}

/// Runs the binary against `project_root` with colors disabled.
#[allow(unused)]
pub fn run_replace(
    project_root: &Path,
    new_name: &str,
    extra_args: &[&str],
) -> assert_cmd::assert::Assert {
    let mut cmd = cargo_bin_cmd!("template-rename");
    cmd.arg(new_name)
        .arg("--project-root")
        .arg(project_root)
        .args(extra_args)
        .env("NO_COLOR", "1");

    cmd.assert()
}
