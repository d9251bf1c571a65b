//! Moving an element within an ordered list (field editor up/down and drag-and-drop)

use crate::domain::a001_collection::FieldDefinition;

/// Move the element at `from` so that it ends up at index `to`.
///
/// Returns `false` and leaves the list untouched when either index is out of
/// range or both are equal.
pub fn move_item<T>(list: &mut Vec<T>, from: usize, to: usize) -> bool {
    if from == to || from >= list.len() || to >= list.len() {
        return false;
    }
    let element = list.remove(from);
    list.insert(to, element);
    true
}

/// Same as [`move_item`], but index 0 is pinned: it can neither be moved nor
/// displaced.
pub fn move_with_pinned_head<T>(list: &mut Vec<T>, from: usize, to: usize) -> bool {
    if from == 0 || to == 0 {
        return false;
    }
    move_item(list, from, to)
}

/// Field editor move: a leading `title` field stays first
pub fn move_field(fields: &mut Vec<FieldDefinition>, from: usize, to: usize) -> bool {
    if fields.first().is_some_and(|f| f.is_title()) {
        move_with_pinned_head(fields, from, to)
    } else {
        move_item(fields, from, to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_collection::FieldType;

    #[test]
    fn test_move_forward_and_back() {
        let mut v = vec!['a', 'b', 'c', 'd'];
        assert!(move_item(&mut v, 0, 2));
        assert_eq!(v, vec!['b', 'c', 'a', 'd']);
        assert!(move_item(&mut v, 3, 0));
        assert_eq!(v, vec!['d', 'b', 'c', 'a']);
    }

    #[test]
    fn test_out_of_range_is_noop() {
        let mut v = vec![1, 2];
        assert!(!move_item(&mut v, 0, 2));
        assert!(!move_item(&mut v, 5, 0));
        assert!(!move_item(&mut v, 1, 1));
        assert_eq!(v, vec![1, 2]);
    }

    #[test]
    fn test_pinned_head() {
        let mut v = vec!["title", "author", "year"];
        assert!(!move_with_pinned_head(&mut v, 2, 0));
        assert!(!move_with_pinned_head(&mut v, 0, 1));
        assert!(move_with_pinned_head(&mut v, 2, 1));
        assert_eq!(v, vec!["title", "year", "author"]);
    }

    #[test]
    fn test_move_field_pins_leading_title() {
        let mut fields = vec![
            FieldDefinition::new("title", "Title", FieldType::Text),
            FieldDefinition::new("author", "Author", FieldType::Text),
        ];
        assert!(!move_field(&mut fields, 1, 0));
        assert_eq!(fields[0].key, "title");

        let mut fields = vec![
            FieldDefinition::new("author", "Author", FieldType::Text),
            FieldDefinition::new("title", "Title", FieldType::Text),
        ];
        assert!(move_field(&mut fields, 1, 0));
        assert_eq!(fields[0].key, "title");
    }
}
