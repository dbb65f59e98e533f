//! `{{url}}` / `{{title}}` placeholder expansion
//!
//! Applied to the optional before/after text blocks attached to each baked
//! embed. Placeholders match case-insensitively and every occurrence is
//! replaced.

use regex::{NoExpand, Regex};
use std::sync::LazyLock;

use super::BakeContext;
use crate::error::BakeResult;
use crate::types::{Frontmatter, LinkedNote, NoteFile};

static URL_VAR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\{\{url\}\}").expect("url placeholder regex"));

static TITLE_VAR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\{\{title\}\}").expect("title placeholder regex"));

/// Expand `{{url}}` against the target's link context.
///
/// Without target frontmatter or a matching link-table row the template is
/// returned verbatim, placeholders unexpanded. With link conversion enabled
/// the replacement is the rewriter's path from `source` to the target;
/// otherwise it is the target's raw vault path.
pub async fn expand_url(
    template: &str,
    target: &NoteFile,
    source: &NoteFile,
    frontmatter: Option<&Frontmatter>,
    ctx: &BakeContext<'_>,
    link_table: &[LinkedNote],
) -> BakeResult<String> {
    let Some(frontmatter) = frontmatter else {
        return Ok(template.to_string());
    };
    let Some(row) = link_table.iter().find(|note| &note.linked == target) else {
        return Ok(template.to_string());
    };
    let replacement = if ctx.settings.conversion.convert_internal_links {
        ctx.paths
            .relative_path(source, row, frontmatter, ctx.settings)
            .await?
    } else {
        row.linked.path.clone()
    };
    Ok(URL_VAR_REGEX
        .replace_all(template, NoExpand(&replacement))
        .into_owned())
}

/// Expand `{{title}}` with the target's resolved display title: the base
/// filename when the target has no frontmatter, otherwise the caller's
/// title policy with a trailing `.md` suffix removed.
pub fn expand_title(
    template: &str,
    target: &NoteFile,
    frontmatter: Option<&Frontmatter>,
    ctx: &BakeContext<'_>,
) -> String {
    let title = match frontmatter {
        None => target.basename().to_string(),
        Some(fm) => {
            let resolved = ctx.titles.title_for(target, Some(fm), ctx.settings);
            resolved
                .strip_suffix(".md")
                .map(str::to_string)
                .unwrap_or(resolved)
        }
    };
    TITLE_VAR_REGEX
        .replace_all(template, NoExpand(&title))
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{FrontmatterTitle, Settings};
    use crate::policy::{DefaultPathRewriter, DefaultSharePolicy, DefaultTitleResolver};

    fn frontmatter(yaml: &str) -> Frontmatter {
        Frontmatter::new(serde_yaml::from_str(yaml).unwrap())
    }

    fn ctx(settings: &Settings) -> BakeContext<'_> {
        BakeContext {
            settings,
            repository: None,
            share: &DefaultSharePolicy,
            paths: &DefaultPathRewriter,
            titles: &DefaultTitleResolver,
        }
    }

    #[tokio::test]
    async fn test_url_and_title_case_variants() {
        let mut settings = Settings::default();
        settings.upload.frontmatter_title = FrontmatterTitle {
            enable: true,
            key: "title".to_string(),
        };
        let ctx = ctx(&settings);
        let source = NoteFile::new("notes/host.md");
        let target = NoteFile::new("foo.md");
        let fm = frontmatter("title: Foo");
        let table = vec![LinkedNote::new(target.clone())];

        let text = expand_url(
            "See {{TITLE}} at {{url}}",
            &target,
            &source,
            Some(&fm),
            &ctx,
            &table,
        )
        .await
        .unwrap();
        let text = expand_title(&text, &target, Some(&fm), &ctx);
        assert_eq!(text, "See Foo at ../foo.md");

        // Mixed-case variants behave identically
        let text = expand_url("{{Url}}", &target, &source, Some(&fm), &ctx, &table)
            .await
            .unwrap();
        assert_eq!(text, "../foo.md");
        assert_eq!(
            expand_title("{{Title}}", &target, Some(&fm), &ctx),
            "Foo"
        );
    }

    #[tokio::test]
    async fn test_url_without_frontmatter_is_verbatim() {
        let settings = Settings::default();
        let ctx = ctx(&settings);
        let target = NoteFile::new("foo.md");
        let table = vec![LinkedNote::new(target.clone())];
        let text = expand_url(
            "at {{url}}",
            &target,
            &NoteFile::new("host.md"),
            None,
            &ctx,
            &table,
        )
        .await
        .unwrap();
        assert_eq!(text, "at {{url}}");
    }

    #[tokio::test]
    async fn test_url_without_link_table_row_is_verbatim() {
        let settings = Settings::default();
        let ctx = ctx(&settings);
        let target = NoteFile::new("foo.md");
        let fm = frontmatter("share: true");
        let text = expand_url(
            "at {{url}}",
            &target,
            &NoteFile::new("host.md"),
            Some(&fm),
            &ctx,
            &[],
        )
        .await
        .unwrap();
        assert_eq!(text, "at {{url}}");
    }

    #[tokio::test]
    async fn test_url_raw_path_when_conversion_disabled() {
        let mut settings = Settings::default();
        settings.conversion.convert_internal_links = false;
        let ctx = ctx(&settings);
        let target = NoteFile::new("sub/foo.md");
        let fm = frontmatter("share: true");
        let table = vec![LinkedNote::new(target.clone())];
        let text = expand_url(
            "{{url}}",
            &target,
            &NoteFile::new("host.md"),
            Some(&fm),
            &ctx,
            &table,
        )
        .await
        .unwrap();
        assert_eq!(text, "sub/foo.md");
    }

    #[test]
    fn test_title_without_frontmatter_uses_basename() {
        let settings = Settings::default();
        let ctx = ctx(&settings);
        let target = NoteFile::new("dir/Bar Note.md");
        assert_eq!(
            expand_title("-> {{title}} <-", &target, None, &ctx),
            "-> Bar Note <-"
        );
    }

    #[test]
    fn test_title_strips_md_suffix() {
        // Title policy falls back to the file name when the frontmatter has
        // no title key; the expander removes the trailing .md
        let settings = Settings::default();
        let ctx = ctx(&settings);
        let target = NoteFile::new("Baz.md");
        let fm = frontmatter("share: true");
        assert_eq!(expand_title("{{title}}", &target, Some(&fm), &ctx), "Baz");
    }
}
