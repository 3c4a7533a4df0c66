use crate::common::{normalized_lines, run_demo_with_input, stdout_of};

#[test]
fn demo_narrates_then_says_goodbye() {
    let output = run_demo_with_input("n\n");
    assert!(output.status.success());
    let lines = normalized_lines(&output.stdout);
    assert!(lines.iter().any(|l| l == "🚀 kgrv package demo"));
    assert!(
        lines
            .iter()
            .any(|l| l == "🔍 Summary: About(kogriv): 6 skills, 3 projects")
    );
    assert!(lines.iter().any(|l| l.ends_with("👋 Goodbye!")));
}

#[test]
fn demo_interactive_round() {
    let output = run_demo_with_input("y\nAlice\nRust\nstop\n");
    assert!(output.status.success());
    let stdout = stdout_of(&output);
    assert!(stdout.contains("👋 Hello, Alice!"));
    assert!(stdout.contains("✅ Added skill: Rust"));
    assert!(stdout.contains("👨‍💻 Developer: Alice"));
    assert!(stdout.contains("  • Rust"));
}

#[test]
fn demo_survives_closed_stdin() {
    let output = run_demo_with_input("");
    assert!(output.status.success());
    assert!(stdout_of(&output).contains("✅ Demo complete!"));
}
