use light_enumset::{EnumSet, enum_index};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Permission {
    Read,
    Write,
    Execute,
    Share,
    Delete,
}

enum_index!(Permission { Read, Write, Execute, Share, Delete });

type Permissions = EnumSet<Permission, u8>;

fn effective(granted: Permissions, revoked: Permissions, ceiling: Permissions) -> Permissions {
    (granted - revoked) & ceiling
}

fn main() {
    let owner = Permissions::all();
    let editor = Permissions::from([Permission::Read, Permission::Write, Permission::Share]);
    let viewer = Permissions::only(Permission::Read);

    let revoked = Permissions::only(Permission::Share);
    let ceiling = !Permissions::only(Permission::Delete);

    for (role, granted) in [("owner", owner), ("editor", editor), ("viewer", viewer)] {
        let perms = effective(granted, revoked, ceiling);
        println!(
            "{role:>6}: {perms:?} (stored as {:#07b})",
            perms.serialize()
        );
        for perm in &perms {
            println!("        may {perm:?}");
        }
    }
}
