//! Store values of unrelated types in the same container and print them through a common interface.

use anymovable::{interface, AnyMovable, Holder};
use std::fmt::Display;

#[interface]
trait Print {
  fn print(&self);
}

impl<T> Print for Holder<T>
where
  T: Display + 'static,
{
  fn print(&self) {
    println!("data = {}", self.object());
  }
}

/// A type without [`Display`], built in place from its parts.
struct Point {
  x: f32,
  y: f32,
}

impl From<(f32, f32)> for Point {
  fn from((x, y): (f32, f32)) -> Self {
    Point { x, y }
  }
}

impl Print for Holder<Point> {
  fn print(&self) {
    let Point { x, y } = self.object();
    println!("point = ({}, {})", x, y);
  }
}

fn main() {
  let mut x = AnyMovable::<dyn Print>::new('c');
  x.print();

  x = AnyMovable::new("123");
  x.print();

  x = AnyMovable::new(1.45);
  x.print();

  x.emplace::<Point, _>((1f32, 2f32));
  x.print();

  x.clear();
  println!("defined: {}", x.is_defined());
}
