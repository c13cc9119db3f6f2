use super::*;
use pretty_assertions::assert_eq;

#[test]
fn buffer_handler_captures_lines() {
    let handler = BufferPrintHandler::new();
    handler.println("hello");
    handler.println("world");
    assert_eq!(handler.get_output(), "hello\nworld\n");
}

#[test]
fn buffer_handler_clear_empties_buffer() {
    let handler = buffer_handler();
    handler.println("hello");
    assert!(!handler.get_output().is_empty());
    handler.clear();
    assert!(handler.get_output().is_empty());
}

#[test]
fn stdout_handler_captures_nothing() {
    let handler = stdout_handler();
    handler.clear();
    assert_eq!(handler.get_output(), "");
}

#[test]
fn silent_handler_discards_output() {
    let handler = silent_handler();
    handler.println("hello");
    assert_eq!(handler.get_output(), "");
}

#[test]
fn shared_handles_see_the_same_buffer() {
    let handler = buffer_handler();
    let alias = Arc::clone(&handler);
    alias.println("from alias");
    assert_eq!(handler.get_output(), "from alias\n");
}
