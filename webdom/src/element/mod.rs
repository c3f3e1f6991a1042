mod attributes;
mod content;
mod node;

pub use attributes::{AttrValue, Attributes};
pub use content::Content;
pub use node::{generate_id, Element, Tag};

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id.as_deref() == Some(id) {
        return Some(root);
    }

    if let Content::Children(children) = &root.content {
        for child in children {
            if let Some(found) = find_element(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// Mark the element with the given ID as focused and clear the flag everywhere else.
pub fn mark_focused(root: &mut Element, focused: Option<&str>) {
    root.focused = focused.is_some() && root.id.as_deref() == focused;

    if let Content::Children(children) = &mut root.content {
        for child in children {
            mark_focused(child, focused);
        }
    }
}
