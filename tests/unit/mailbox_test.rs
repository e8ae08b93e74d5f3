//! Tests for mailbox implementations

use kernel_sim::core::{Mailbox, Message};
use kernel_sim::infra::mailbox::memory::InMemoryMailbox;

fn make_message(from: u32, text: &str) -> Message {
    Message {
        from,
        text: text.to_string(),
    }
}

#[test]
fn test_in_memory_mailbox_deliver_and_take() {
    let mailbox = InMemoryMailbox::new();

    mailbox.deliver(2, make_message(1, "result"));

    assert_eq!(mailbox.pending(2), 1);
    assert_eq!(mailbox.take(2), Some(make_message(1, "result")));
    assert_eq!(mailbox.pending(2), 0);
}

#[test]
fn test_in_memory_mailbox_created_lazily() {
    let mailbox = InMemoryMailbox::new();
    assert!(mailbox.destinations().is_empty());

    assert_eq!(mailbox.take(5), None);
    assert!(mailbox.destinations().is_empty());

    mailbox.deliver(5, make_message(1, "hi"));
    mailbox.deliver(3, make_message(1, "hi"));
    assert_eq!(mailbox.destinations(), vec![3, 5]);
}
