use num_derive::FromPrimitive;
use num_traits::FromPrimitive;

use tinyflags::queue::Queue;
use tinyflags::Flag;

#[derive(Debug, Clone, Copy, PartialEq, Eq, FromPrimitive)]
enum Capability {
    Read = 0,
    Write = 1,
    Execute = 2,
    Admin = 3,
}

fn main() {
    let mut session = Flag::zero();
    session.set(Capability::Read as usize, true).unwrap();
    session.set(Capability::Write as usize, true).unwrap();
    println!("session:  {}", session.bits_preview());

    let admin = Flag::combine([u32::from(session), 1 << Capability::Admin as usize]);
    println!("admin:    {}", admin.bits_preview());

    for index in 0..4 {
        if admin.get_bit(index).unwrap() {
            println!("granted:  {:?}", Capability::from_usize(index).unwrap());
        }
    }

    assert!(Flag::matches(session, admin, Capability::Read as usize).unwrap());

    let mut pending: Queue<Flag, 4> = Queue::new();
    pending.push(session).unwrap();
    pending.push(admin).unwrap();
    while let Some(flags) = pending.pop() {
        println!("pending:  {}", flags.bits_preview());
    }
}
