#[cfg(test)]
pub mod test {
    use std::fs;
    use std::path::PathBuf;

    use tempfile::TempDir;

    use crate::types::PathList;

    /// Dotenv files shared by the resolution tests, written into a fresh
    /// temporary directory.
    const FILES: &[(&str, &str)] = &[
        (".env", "TEST_ONE=overridden\n"),
        (".env.defaults.example", "TEST_ONE=one\nTEST_TWO=two\n"),
        (".env.override", "TEST_ONE=one overridden\nTEST_THREE=three\n"),
        (".env.missing", "TEST_ONE=one\n"),
        (
            ".env.extra",
            "TEST_ONE=one\nTEST_TWO=two\nTEST_THREE=three\nTEST_FOUR=four\n",
        ),
        (
            ".env.whitespace",
            "TEST_TWO=string with whitespace\nTEST_THREE=three\n",
        ),
        (
            ".env.literal",
            "# values are kept as written\n\
             GREETING=hello world\n\
             PASSWORD=abc$def\n\
             REF=$HOME\n\
             this line is not an assignment\n\
             PATTERN=^\\S+$ # trailing comment\n",
        ),
        (".env.schema.example", "TEST_ONE=\nTEST_TWO=\nTEST_THREE=\n"),
        (
            ".env.schema.regex",
            "TEST_ONE=\nTEST_TWO=^\\S*$\nTEST_THREE=^\\S+$\n",
        ),
        (
            ".env.schema.regex-quoted",
            "TEST_ONE=\nTEST_TWO='^\\S*$'\nTEST_THREE=\"^\\S+$\"\n",
        ),
        (".env.schema.regex-nonspace", "TEST_TWO=^\\S+$\n"),
        (".env.schema.regex-invalid", "TEST_ONE=(unclosed\nTEST_TWO=\n"),
        (
            ".env.schema.regex-optional",
            "TEST_ONE=\nTEST_MISSING_REQUIRED=.+\n",
        ),
        (".env.schema.extend-four", "TEST_FOUR=\n"),
        (".env.schema.extend-regex-strict", "TEST_ONE=^\\S+$\n"),
        (".env.schema.extend-regex-pass", "TEST_ONE=^one\n"),
    ];

    pub struct Fixture {
        dir: TempDir,
    }

    impl Fixture {
        pub fn new() -> Self {
            let dir = TempDir::new().unwrap();
            for (name, content) in FILES {
                fs::write(dir.path().join(name), content).unwrap();
            }
            Fixture { dir }
        }

        /// Absolute path of a fixture file (which need not exist).
        pub fn path(&self, name: &str) -> PathBuf {
            self.dir.path().join(name)
        }

        /// Single-entry path list for a fixture file.
        pub fn list(&self, name: &str) -> PathList {
            PathList::from(self.path(name))
        }
    }

    #[test]
    fn fixture_files_define_keys() {
        let fx = Fixture::new();
        for (name, _) in FILES {
            let content = fs::read_to_string(fx.path(name)).unwrap();
            assert!(!crate::file::parse(&content).is_empty(), "{name} is empty");
        }
    }
}
