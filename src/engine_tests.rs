//! Engine Tests
//!
//! Multi-pass fixing, parse failures, directory linting and the result cache,
//! run against temporary project trees.

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    use crate::cache::ResultCache;
    use crate::config::{LintConfig, RuleOptions};
    use crate::discovery::lint_directory;
    use crate::engine::Linter;
    use crate::error::LintError;

    const CLIENT_PAGE: &str = r#"import { useState } from 'react';

export default function Page() {
  const [open, setOpen] = useState(false);
  return <button onClick={() => setOpen(!open)}>{String(open)}</button>;
}
"#;

    const SERVER_PAGE: &str = r#"export default async function Page() {
  const data = await load();
  return <main>{data.title}</main>;
}
"#;

    fn write(root: &Path, rel: &str, contents: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    // ═══════════════════════════════════════════════════════════════════════════════
    // FIXING
    // ═══════════════════════════════════════════════════════════════════════════════

    #[test]
    fn test_fix_source_inserts_directive_once() {
        let linter = Linter::new(LintConfig::recommended("/project"));
        let result = linter
            .fix_source(Path::new("/project/app/page.tsx"), CLIENT_PAGE)
            .unwrap();

        assert!(result.fixed);
        assert!(result.remaining.is_empty());
        assert_eq!(result.output, format!("'use client'\n{}", CLIENT_PAGE));
        assert_eq!(result.output.matches("'use client'").count(), 1);
    }

    #[test]
    fn test_fix_source_leaves_clean_file_alone() {
        let linter = Linter::new(LintConfig::recommended("/project"));
        let result = linter
            .fix_source(Path::new("/project/app/page.tsx"), SERVER_PAGE)
            .unwrap();

        assert!(!result.fixed);
        assert!(result.remaining.is_empty());
        assert_eq!(result.output, SERVER_PAGE);
    }

    #[test]
    fn test_parse_failure_is_an_error() {
        let linter = Linter::new(LintConfig::recommended("/project"));
        let err = linter
            .lint_source(Path::new("/project/app/broken.tsx"), "export function (")
            .unwrap_err();
        assert!(matches!(err, LintError::Parse { .. }));
        assert!(err.to_string().contains("broken.tsx"));
    }

    #[test]
    fn test_empty_file() {
        let linter = Linter::new(LintConfig::recommended("/project"));
        let findings = linter
            .lint_source(Path::new("/project/app/empty.tsx"), "")
            .unwrap();
        assert!(findings.is_empty());
    }

    // ═══════════════════════════════════════════════════════════════════════════════
    // DIRECTORY LINTING
    // ═══════════════════════════════════════════════════════════════════════════════

    #[test]
    fn test_lint_directory() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        write(root, "app/page.tsx", CLIENT_PAGE);
        write(root, "app/layout.tsx", SERVER_PAGE);
        write(root, "app/legacy/old.tsx", CLIENT_PAGE);
        write(root, "app/broken.tsx", "export function (");
        write(root, "node_modules/pkg/index.jsx", CLIENT_PAGE);

        let mut config = LintConfig::recommended(root);
        for name in ["event-handler", "use-client-hook"] {
            config
                .set_rule(name, RuleOptions::ignoring(["app/legacy/**"]))
                .unwrap();
        }
        let linter = Linter::new(config);
        let report = lint_directory(root, &linter, None).unwrap();

        let paths: Vec<&str> = report.files.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(paths, vec!["app/layout.tsx", "app/legacy/old.tsx", "app/page.tsx"]);

        assert!(report.files[0].findings.is_empty());
        assert!(report.files[1].findings.is_empty());
        let rules: Vec<&str> = report.files[2]
            .findings
            .iter()
            .map(|f| f.rule.as_str())
            .collect();
        assert_eq!(rules, vec!["event-handler", "use-client-hook"]);
        assert_eq!(report.finding_count(), 2);

        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].path, "app/broken.tsx");
    }

    #[test]
    fn test_lint_directory_requires_directory() {
        let dir = tempfile::tempdir().unwrap();
        let linter = Linter::new(LintConfig::recommended(dir.path()));
        let err = lint_directory(&dir.path().join("missing"), &linter, None).unwrap_err();
        assert!(matches!(err, LintError::Io(_)));
    }

    #[test]
    fn test_lint_directory_with_cache() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("project");
        write(&root, "src/Button.tsx", CLIENT_PAGE);

        let config = LintConfig::recommended(&root);
        let cache = ResultCache::new(dir.path().join("cache"), config.fingerprint());
        let linter = Linter::new(config);

        let first = lint_directory(&root, &linter, Some(&cache)).unwrap();
        assert_eq!(first.finding_count(), 2);

        let file = root.join("src/Button.tsx");
        assert_eq!(
            cache.get(&file, CLIENT_PAGE),
            Some(first.files[0].findings.clone())
        );

        write(&root, "src/Button.tsx", &format!("'use client'\n{}", CLIENT_PAGE));
        let second = lint_directory(&root, &linter, Some(&cache)).unwrap();
        assert_eq!(second.finding_count(), 0);
    }
}
