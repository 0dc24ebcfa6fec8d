//! Request path canonicalisation.

/// Return the canonical form of `path`.
///
/// The result starts with exactly one `/`, has no repeated slashes, no `.` elements, and every
/// `..` element is resolved against the element before it (`..` at the root stays at the
/// root). A trailing slash is kept if `path` had one, or ended in a `.` element.
///
/// ```
/// use waymark::clean_path;
///
/// assert_eq!(clean_path(""), "/");
/// assert_eq!(clean_path("abc//def/"), "/abc/def/");
/// assert_eq!(clean_path("/abc/def/../ghi/./jkl"), "/abc/ghi/jkl");
/// ```
pub fn clean_path(path: &str) -> String {
    let trailing =
        (path.len() > 1 && path.ends_with('/')) || path == "." || path.ends_with("/.");

    let mut elems: Vec<&str> = vec![];
    for elem in path.split('/') {
        match elem {
            "" | "." => {}
            ".." => {
                elems.pop();
            }
            elem => elems.push(elem),
        }
    }

    let mut buf = String::with_capacity(path.len() + 1);
    for elem in elems {
        buf.push('/');
        buf.push_str(elem);
    }

    if buf.is_empty() {
        buf.push('/');
    } else if trailing {
        buf.push('/');
    }

    buf
}
