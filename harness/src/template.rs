use regex::Regex;
use std::{borrow::Cow, sync::LazyLock};

static PARAM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(":([^/]*)").expect("parameter pattern is valid"));

/// Placeholder convention a router library expects in its path templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    /// `/user/:name`, the syntax the fixture tables are written in.
    Colon,
    /// `/user/{name}`
    Brace,
    /// `^/user/(?P<name>[^/]+)$`, an anchored regular expression.
    Regex,
}

/// Rewrites a colon-parameter template into the given placeholder syntax.
pub fn translate(path: &str, placeholder: Placeholder) -> Cow<'_, str> {
    match placeholder {
        Placeholder::Colon => Cow::Borrowed(path),
        Placeholder::Brace => PARAM.replace_all(path, "{$1}"),
        Placeholder::Regex => {
            let mut pattern = String::with_capacity(path.len() + 2);
            pattern.push('^');
            let mut last = 0;
            for caps in PARAM.captures_iter(path) {
                let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
                    continue;
                };
                pattern.push_str(&regex::escape(&path[last..whole.start()]));
                pattern.push_str("(?P<");
                pattern.push_str(name.as_str());
                pattern.push_str(">[^/]+)");
                last = whole.end();
            }
            pattern.push_str(&regex::escape(&path[last..]));
            pattern.push('$');
            Cow::Owned(pattern)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colon_is_untouched() {
        let path = "/people/:userId/activities/:collection";
        assert!(matches!(translate(path, Placeholder::Colon), Cow::Borrowed(p) if p == path));
    }

    #[test]
    fn brace_rewrites_every_param() {
        assert_eq!(
            translate("/people/:userId/activities/:collection", Placeholder::Brace),
            "/people/{userId}/activities/{collection}"
        );
        assert_eq!(
            translate("/:a/:b/:c/:d/:e", Placeholder::Brace),
            "/{a}/{b}/{c}/{d}/{e}"
        );
        assert_eq!(translate("/people", Placeholder::Brace), "/people");
    }

    #[test]
    fn regex_is_anchored_and_escaped() {
        assert_eq!(
            translate("/user/:name", Placeholder::Regex),
            "^/user/(?P<name>[^/]+)$"
        );
        assert_eq!(
            translate("/rate_limit", Placeholder::Regex),
            "^/rate_limit$"
        );
        assert_eq!(
            translate("/1/users/:objectId/x.json", Placeholder::Regex),
            r"^/1/users/(?P<objectId>[^/]+)/x\.json$"
        );
    }

    #[test]
    fn regex_template_matches_concrete_path() {
        let re = Regex::new(&translate("/repos/:owner/:repo/stargazers", Placeholder::Regex)).unwrap();
        let caps = re.captures("/repos/julienschmidt/httprouter/stargazers").unwrap();
        assert_eq!(&caps["owner"], "julienschmidt");
        assert_eq!(&caps["repo"], "httprouter");
        assert!(!re.is_match("/repos/julienschmidt/httprouter/stargazers/extra"));
    }
}
