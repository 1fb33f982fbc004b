use light_enumset::{EnumSet, enum_index};

#[derive(Clone, Copy, Debug)]
enum Color {
    Red,
    Green,
}

enum_index!(Color { Red, Green });

fn main() {
    let mut set = EnumSet::<Color>::only(Color::Red);
    for color in &set {
        set.insert(color);
    }
    set.insert(Color::Green);
}
