//! Navigation URLs for selected results, relative to the documentation root.

use crate::types::{Candidate, Category};

const SLASH: &str = "/";

/// `java.util.concurrent` → `java/util/concurrent`
fn package_path(package: &str) -> String {
    package.replace('.', SLASH)
}

/// Module directory prefix for a result, if the documentation is modular.
///
/// Types and members that do not name their module inherit it from the last
/// package entry with the same name that does.
pub fn url_prefix(category: Category, candidate: &Candidate, packages: &[Candidate]) -> String {
    let module = match category {
        Category::Module => Some(candidate.name.as_str()),
        Category::Package => candidate.module.as_deref(),
        Category::Type | Category::Member => candidate.module.as_deref().or_else(|| {
            packages
                .iter()
                .rev()
                .find(|package| {
                    package.module.is_some() && candidate.package.as_ref() == Some(&package.name)
                })
                .and_then(|package| package.module.as_deref())
        }),
        Category::SearchTag => None,
    };
    module.map(|m| format!("{}{}", m, SLASH)).unwrap_or_default()
}

/// URL of a result's page, relative to the documentation root.
pub fn item_url(category: Category, candidate: &Candidate, packages: &[Candidate]) -> String {
    let mut url = url_prefix(category, candidate, packages);
    match category {
        Category::Module => url.push_str("module-summary.html"),
        Category::Package => match &candidate.url {
            Some(explicit) => url.clone_from(explicit),
            None => {
                url.push_str(&package_path(&candidate.name));
                url.push_str("/package-summary.html");
            }
        },
        Category::Type => {
            if let Some(explicit) = &candidate.url {
                url.clone_from(explicit);
            } else {
                if let Some(package) = candidate.named_package() {
                    url.push_str(&package_path(package));
                    url.push_str(SLASH);
                }
                url.push_str(&candidate.name);
                url.push_str(".html");
            }
        }
        Category::Member => {
            if let Some(package) = candidate.named_package() {
                url.push_str(&package_path(package));
                url.push_str(SLASH);
            }
            url.push_str(candidate.class.as_deref().unwrap_or_default());
            url.push_str(".html#");
            url.push_str(candidate.url.as_deref().unwrap_or(&candidate.name));
        }
        Category::SearchTag => url.push_str(candidate.url.as_deref().unwrap_or_default()),
    }
    url
}

/// Absolute navigation target: `base_path` joined with [`item_url`].
pub fn navigation_url(
    base_path: &str,
    category: Category,
    candidate: &Candidate,
    packages: &[Candidate],
) -> String {
    format!("{}{}", base_path, item_url(category, candidate, packages))
}
