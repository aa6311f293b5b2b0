//! Guided walkthrough of the namespace operations.

use treefs_core::Namespace;

fn outcome(ok: bool) -> &'static str {
    if ok { "SUCCESS" } else { "FAILED" }
}

fn expect_failure(ok: bool) -> &'static str {
    if ok { "SUCCESS" } else { "FAILED (as expected)" }
}

fn print_list(items: &[String]) {
    for item in items {
        println!("- {item}");
    }
}

/// Run the walkthrough, printing each step to stdout.
pub fn run_demo() {
    let mut ns = Namespace::new();

    println!("=== Namespace walkthrough ===");
    println!("Current directory: {}", ns.current_path());
    println!();

    println!("Creating directories");
    for path in ["/home/user/documents", "temp", "projects/cpp", "projects/python"] {
        println!("mkdir('{path}'): {}", outcome(ns.mkdir(path)));
    }

    println!();
    println!("Root directory contents:");
    print_list(&ns.list_current());

    println!();
    println!("Changing directories");
    for path in ["/home/user", "documents"] {
        println!("chdir('{path}'): {}", outcome(ns.chdir(path)));
        println!("Current directory: {}", ns.current_path());
    }

    println!();
    println!("Navigation with .. and .");
    for path in ["..", "."] {
        println!("chdir('{path}'): {}", outcome(ns.chdir(path)));
        println!("Current directory: {}", ns.current_path());
    }

    println!();
    println!("Pattern matching");
    ns.chdir("/");
    for path in ["/ABC/test1/DC", "/ABC/test2/DC", "/ABC/direct/DC", "/ABC/another/DC"] {
        ns.mkdir(path);
    }
    let pattern = "/ABC/*/DC";
    let matches = ns.get_files(pattern);
    println!("Pattern '{pattern}' matches ({} results):", matches.len());
    print_list(&matches);

    println!();
    println!("File creation");
    ns.chdir("/home/user");
    for path in ["test.txt", "readme.md"] {
        println!("createFile('{path}'): {}", outcome(ns.create_file(path)));
    }
    println!("Contents of {}:", ns.current_path());
    print_list(&ns.list_current());

    println!();
    println!("Error handling");
    println!(
        "chdir('/nonexistent'): {}",
        expect_failure(ns.chdir("/nonexistent"))
    );
    println!("mkdir(''): {}", expect_failure(ns.mkdir("")));
    println!(
        "chdir('test.txt'): {}",
        expect_failure(ns.chdir("test.txt"))
    );

    println!();
    println!("Deep navigation");
    ns.chdir("/");
    ns.mkdir("/deep/nested/structure/here");
    for path in ["/deep/nested/structure/here", "../.."] {
        println!("chdir('{path}'): {}", outcome(ns.chdir(path)));
        println!("Current directory: {}", ns.current_path());
    }

    println!();
    println!("Path existence checks");
    for path in ["/home/user", "/home/user/test.txt", "/nonexistent"] {
        let state = if ns.path_exists(path) {
            "EXISTS"
        } else {
            "NOT EXISTS"
        };
        println!("pathExists('{path}'): {state}");
    }

    println!();
    println!("=== Walkthrough complete ===");
}
