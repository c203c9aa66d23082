//! End-to-end ledger scenarios.
//!
//! Drives the public API the way an embedding application would: once
//! directly against `WalletService` with random ids, once through the
//! command adapter with sequential ids.

use wallet_hex::inbound::{Outcome, Session, render};
use wallet_hex::{SequentialIdGenerator, WalletService};
use wallet_types::{AccountId, Money, PaymentStatus, WalletError};

#[test]
fn register_deposit_pay_reject_repeat() {
    let mut service = WalletService::new();

    let account = service.register_account("+992900010203").unwrap();
    assert_eq!(account.id, AccountId::new(1));
    assert_eq!(account.balance, Money::zero());

    service.deposit(account.id, Money::new(500)).unwrap();
    assert_eq!(
        service.find_account_by_id(account.id).unwrap().balance,
        Money::new(500)
    );

    let payment = service.pay(account.id, Money::new(100), "food").unwrap();
    assert_eq!(payment.status, PaymentStatus::InProgress);
    assert_eq!(
        service.find_account_by_id(account.id).unwrap().balance,
        Money::new(400)
    );

    service.reject(&payment.id).unwrap();
    assert_eq!(
        service.find_payment_by_id(&payment.id).unwrap().status,
        PaymentStatus::Fail
    );
    assert_eq!(
        service.find_account_by_id(account.id).unwrap().balance,
        Money::new(500)
    );

    let repeated = service.repeat(&payment.id).unwrap();
    assert_ne!(repeated.id, payment.id);
    assert_eq!(repeated.status, PaymentStatus::InProgress);
    assert_eq!(
        service.find_account_by_id(account.id).unwrap().balance,
        Money::new(400)
    );
}

#[test]
fn favorites_replay_with_fresh_ids() {
    let mut service = WalletService::new();
    let account = service.register_account("+992900000001").unwrap();
    service.deposit(account.id, Money::new(10_000_00)).unwrap();
    let payment = service.pay(account.id, Money::new(1_000_0), "auto").unwrap();

    let favorite = service.favorite_payment(&payment.id, "Fuel").unwrap();
    let first = service.pay_from_favorite(&favorite.id).unwrap();
    let second = service.pay_from_favorite(&favorite.id).unwrap();

    for replay in [&first, &second] {
        assert_eq!(replay.account_id, favorite.account_id);
        assert_eq!(replay.amount, favorite.amount);
        assert_eq!(replay.category, favorite.category);
        assert_ne!(replay.id, payment.id);
    }
    assert_ne!(first.id, second.id);
    assert_eq!(
        service.find_account_by_id(account.id).unwrap().balance,
        Money::new(10_000_00 - 3 * 1_000_0)
    );
}

#[test]
fn failed_operations_leave_state_unchanged() {
    let mut service = WalletService::new();
    let account = service.register_account("+992900010203").unwrap();
    service.deposit(account.id, Money::new(100)).unwrap();

    assert_eq!(
        service.register_account("+992900010203"),
        Err(WalletError::PhoneRegistered)
    );
    assert_eq!(
        service.pay(account.id, Money::new(101), "food"),
        Err(WalletError::NotEnoughBalance)
    );
    assert_eq!(
        service.deposit(account.id, Money::new(-1)),
        Err(WalletError::AmountMustBePositive)
    );

    assert_eq!(service.account_count(), 1);
    assert_eq!(service.payment_count(), 0);
    assert_eq!(
        service.find_account_by_id(account.id).unwrap().balance,
        Money::new(100)
    );
}

#[test]
fn command_script_produces_json_lines() {
    let script = "\
# scenario
register +992900010203
deposit 1 500
pay 1 100 food
reject id-1
repeat id-1
account 1
pay 1 1000 food
";

    let mut session = Session::new(WalletService::with_id_generator(
        SequentialIdGenerator::new("id-"),
    ));
    let lines: Vec<String> = script
        .lines()
        .filter_map(|line| session.execute_line(line))
        .map(|result| render(&result))
        .collect();

    assert_eq!(lines.len(), 7);
    assert_eq!(lines[1], r#"{"kind":"done"}"#);
    assert_eq!(
        lines[2],
        r#"{"kind":"payment","id":"id-1","account_id":1,"amount":100,"category":"food","status":"INPROGRESS"}"#
    );
    assert_eq!(lines[3], r#"{"kind":"done"}"#);
    assert_eq!(
        lines[4],
        r#"{"kind":"payment","id":"id-2","account_id":1,"amount":100,"category":"food","status":"INPROGRESS"}"#
    );
    assert_eq!(
        lines[5],
        r#"{"kind":"account","id":1,"phone":"+992900010203","balance":400}"#
    );
    assert_eq!(lines[6], r#"{"error":"not enough balance"}"#);

    let Ok(Outcome::Payment(original)) = session.execute_line("payment id-1").unwrap() else {
        panic!("expected the original payment");
    };
    assert_eq!(original.status, PaymentStatus::Fail);
}

#[test]
fn command_script_lookups_and_not_found_lines() {
    let script = "\
register +992900010203
deposit 1 500
pay 1 100 -misc
save-favorite id-1 Weekly shop
favorite id-2
payment missing
account 9
favorite missing
";

    let mut session = Session::new(WalletService::with_id_generator(
        SequentialIdGenerator::new("id-"),
    ));
    let lines: Vec<String> = script
        .lines()
        .filter_map(|line| session.execute_line(line))
        .map(|result| render(&result))
        .collect();

    assert_eq!(lines.len(), 8);
    assert_eq!(
        lines[2],
        r#"{"kind":"payment","id":"id-1","account_id":1,"amount":100,"category":"-misc","status":"INPROGRESS"}"#
    );
    assert_eq!(lines[3], lines[4]);
    assert_eq!(
        lines[4],
        r#"{"kind":"favorite","id":"id-2","account_id":1,"name":"Weekly shop","amount":100,"category":"-misc"}"#
    );
    assert_eq!(lines[5], r#"{"error":"payment not found"}"#);
    assert_eq!(lines[6], r#"{"error":"account not found"}"#);
    assert_eq!(lines[7], r#"{"error":"favorite not found"}"#);
}
