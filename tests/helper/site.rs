//! On-disk documentation site fixtures

use std::path::Path;

use serde_json::json;
use tempfile::TempDir;

/// A temporary site root with `versions.json` and per-version metadata
pub struct SiteFixture {
    pub dir: TempDir,
}

impl SiteFixture {
    /// `builds` pairs each released version with the product version hardcoded
    /// into its build, newest first.
    pub fn new(builds: &[(&str, &str)]) -> Self {
        let dir = TempDir::new().unwrap();
        let versions: Vec<&str> = builds.iter().map(|(version, _)| *version).collect();
        std::fs::write(
            dir.path().join("versions.json"),
            serde_json::to_string(&versions).unwrap(),
        )
        .unwrap();

        let fixture = Self { dir };
        for (version, built) in builds {
            fixture.write_metadata(version, &help_all(built).to_string());
        }
        fixture
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn write_metadata(&self, version: &str, content: &str) {
        let reference = self
            .root()
            .join(format!("versioned_docs/version-{version}/reference"));
        std::fs::create_dir_all(&reference).unwrap();
        std::fs::write(reference.join("help-all.json"), content).unwrap();
    }

    pub fn remove_metadata(&self, version: &str) {
        std::fs::remove_dir_all(
            self.root()
                .join(format!("versioned_docs/version-{version}")),
        )
        .unwrap();
    }
}

/// A trimmed-down `help-all.json` whose hardcoded product version is `built`
pub fn help_all(built: &str) -> serde_json::Value {
    json!({
        "scope_to_help_info": {
            "": {
                "scope": "",
                "advanced": [
                    {
                        "config_key": "pants_version",
                        "typ": "str",
                        "value_history": {
                            "ranked_values": [
                                { "rank": "NONE", "value": null, "details": null },
                                { "rank": "HARDCODED", "value": built, "details": null },
                                { "rank": "CONFIG", "value": built, "details": "pants.toml" }
                            ]
                        }
                    }
                ]
            }
        }
    })
}
