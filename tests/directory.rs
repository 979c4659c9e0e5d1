use std::sync::{Arc, Mutex};
use std::thread;

use log::LevelFilter;
use messenger_directory::config::Config;
use messenger_directory::group::Kind;
use messenger_directory::message::model::Message;
use messenger_directory::user::model::User;
use messenger_directory::{Directory, Error};

fn register_all(dir: &mut Directory, names: &[&str]) -> Vec<User> {
    names
        .iter()
        .enumerate()
        .map(|(i, n)| dir.register(*n, format!("+3736900{i:04}")).unwrap())
        .collect()
}

fn new_message(dir: &mut Directory, content: &str) -> Message {
    let id = dir.create_message(content);
    dir.find_message(&id).cloned().unwrap()
}

#[test]
fn should_register_each_mobile_once() {
    let mut dir = Directory::new();

    for mobile in ["+37369000001", "+37369000002", "+37369000003"] {
        assert!(dir.register("first", mobile).is_ok());
        assert_eq!(
            dir.register("second", mobile),
            Err(Error::DuplicateUser(mobile.into()))
        );
    }
}

#[test]
fn should_name_groups_by_custom_creation_order() {
    let mut dir = Directory::new();
    let u = register_all(
        &mut dir,
        &["Alex", "Bob", "Charlie", "Dan", "Evan", "Felix", "Graham", "Hugh"],
    );

    let g1 = dir.create_group(&u[0..3]);
    let chat = dir.create_group(&u[3..5]);
    let g2 = dir.create_group(&u[5..8]);

    assert_eq!(g1.name(), "Group 1");
    assert_eq!(chat.name(), "Evan");
    assert_eq!(chat.kind(), &Kind::Chat);
    assert_eq!(g2.name(), "Group 2");
}

#[test]
fn should_allow_personal_chats_sharing_a_name() {
    let mut dir = Directory::new();
    let alex = dir.register("Alex", "1").unwrap();
    let dan = dir.register("Dan", "2").unwrap();
    let bob1 = dir.register("Bob", "3").unwrap();
    let bob2 = dir.register("Bob", "4").unwrap();

    let c1 = dir.create_group(&[alex, bob1]);
    let c2 = dir.create_group(&[dan, bob2]);

    assert_eq!(c1.name(), c2.name());
    assert_ne!(c1.id(), c2.id());
    assert_eq!(dir.custom_group_count(), 0);
}

#[test]
fn should_return_n_for_nth_message() {
    let mut dir = Directory::new();

    for n in 1..=20u64 {
        assert_eq!(dir.create_message(format!("message {n}")).get(), n);
    }
}

#[test]
fn should_number_messages_independently_of_groups() {
    let mut dir = Directory::new();
    let u = register_all(&mut dir, &["a", "b", "c"]);
    let chat = dir.create_group(&u[0..2]);
    let group = dir.create_group(&u);

    let m1 = new_message(&mut dir, "one");
    dir.send(&m1, &u[0], &chat).unwrap();
    let m2 = new_message(&mut dir, "two");
    dir.send(&m2, &u[2], &group).unwrap();
    let unsent = dir.create_message("three");

    assert_eq!(m1.id().get(), 1);
    assert_eq!(m2.id().get(), 2);
    assert_eq!(unsent.get(), 3);
    assert!(dir.sender(&unsent).is_none());
}

#[test]
fn should_return_running_count_on_send() {
    let mut dir = Directory::new();
    let u = register_all(&mut dir, &["a", "b", "c", "d"]);
    let group = dir.create_group(&u);

    let counts: Vec<usize> = (0..10)
        .map(|i| {
            let m = new_message(&mut dir, &format!("m{i}"));
            dir.send(&m, &u[i % u.len()], &group).unwrap()
        })
        .collect();

    assert_eq!(counts, (1..=10).collect::<Vec<usize>>());
    let contents: Vec<&str> = dir
        .messages(&group)
        .unwrap()
        .iter()
        .map(|m| m.content())
        .collect();
    assert_eq!(contents, vec!["m0", "m1", "m2", "m3", "m4", "m5", "m6", "m7", "m8", "m9"]);
}

#[test]
fn should_not_append_on_failed_send() {
    let mut dir = Directory::new();
    let mut other = Directory::new();
    let u = register_all(&mut dir, &["a", "b", "c"]);
    let chat = dir.create_group(&u[0..2]);
    let foreign = other.create_group(&u[0..2]);
    let m = new_message(&mut dir, "hi");

    assert_eq!(
        dir.send(&m, &u[0], &foreign),
        Err(Error::GroupNotFound(*foreign.id()))
    );
    assert_eq!(
        dir.send(&m, &u[2], &chat),
        Err(Error::NotAMember(u[2].mobile().clone()))
    );

    assert_eq!(dir.message_count(&chat), Ok(0));
    assert!(dir.sender(m.id()).is_none());
    assert_eq!(
        dir.message_count(&foreign),
        Err(Error::GroupNotFound(*foreign.id()))
    );
}

#[test]
fn should_move_admin_rights_on_transfer() {
    let mut dir = Directory::new();
    let u = register_all(&mut dir, &["admin", "member", "other"]);
    let group = dir.create_group(&u);

    assert_eq!(
        dir.transfer_admin(&u[1], &u[2], &group),
        Err(Error::NotAuthorized(u[1].mobile().clone()))
    );

    dir.transfer_admin(&u[0], &u[1], &group).unwrap();

    assert!(dir.members(&group).unwrap().contains(&u[0]));
    assert!(!dir.is_admin(&u[0], &group).unwrap());
    assert!(dir.is_admin(&u[1], &group).unwrap());
    assert_eq!(
        dir.transfer_admin(&u[0], &u[2], &group),
        Err(Error::NotAuthorized(u[0].mobile().clone()))
    );

    // former admin can still send
    let m = new_message(&mut dir, "still here");
    assert_eq!(dir.send(&m, &u[0], &group), Ok(1));
}

#[test]
fn should_reject_approver_outside_group() {
    let mut dir = Directory::new();
    let u = register_all(&mut dir, &["a", "b", "c", "outsider"]);
    let group = dir.create_group(&u[0..3]);

    assert_eq!(
        dir.transfer_admin(&u[3], &u[1], &group),
        Err(Error::NotAuthorized(u[3].mobile().clone()))
    );
    assert_eq!(dir.admin(&group).unwrap(), &u[0]);
}

#[test]
fn should_serialize_summary() {
    let mut dir = Directory::new();
    let u = register_all(&mut dir, &["jora", "valera"]);
    let chat = dir.create_group(&u);
    let m = new_message(&mut dir, "salut");
    dir.send(&m, &u[1], &chat).unwrap();

    let json = serde_json::to_value(dir.summary(&chat).unwrap()).unwrap();

    assert_eq!(json["name"], "valera");
    assert_eq!(json["kind"], "chat");
    assert_eq!(json["admin"], u[0].mobile().as_str());
    assert_eq!(json["members"][1]["name"], "valera");
    assert_eq!(json["message_count"], 1);
}

#[test]
fn should_share_directory_behind_one_lock() {
    let dir = Arc::new(Mutex::new(Directory::new()));

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let dir = Arc::clone(&dir);
            thread::spawn(move || dir.lock().unwrap().create_message(format!("m{i}")))
        })
        .collect();

    let mut ids: Vec<u64> = handles
        .into_iter()
        .map(|h| h.join().unwrap().get())
        .collect();
    ids.sort();

    assert_eq!(ids, (1..=8).collect::<Vec<u64>>());
}

#[test]
fn should_init_logger_once() {
    let cfg = Config {
        log_level: LevelFilter::Debug,
        log_file: None,
    };

    assert!(cfg.init_logger().is_ok());
    assert!(cfg.init_logger().is_err());

    let mut dir = Directory::new();
    assert!(dir.register("jora", "1").is_ok());
}
