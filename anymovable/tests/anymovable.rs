use anymovable::{interface, AnyMovable, Holder, Root};
use std::{cell::Cell, fmt::Display, rc::Rc};

#[interface]
pub trait Any {
  fn print(&self) -> String;

  fn key(&self) -> Vec<i64>;

  fn bump(&mut self);
}

/// Integers print and compare the same way, whatever their width.
pub trait Integer: Display + Into<i64> + Copy + 'static {}

impl Integer for u8 {}
impl Integer for i32 {}
impl Integer for i64 {}

impl<T> Any for Holder<T>
where
  T: Integer,
{
  fn print(&self) -> String {
    format!("data = {}", self.object())
  }

  fn key(&self) -> Vec<i64> {
    vec![(*self.object()).into()]
  }

  fn bump(&mut self) {}
}

impl Any for Holder<String> {
  fn print(&self) -> String {
    format!("data = {}", self.object())
  }

  fn key(&self) -> Vec<i64> {
    self.object().bytes().map(i64::from).collect()
  }

  fn bump(&mut self) {
    self.object_mut().push('!');
  }
}

impl<const N: usize> Any for Holder<[i64; N]> {
  fn print(&self) -> String {
    format!("data = {:?}", self.elements())
  }

  fn key(&self) -> Vec<i64> {
    self.elements().to_vec()
  }

  fn bump(&mut self) {
    for element in self.elements_mut() {
      *element += 1;
    }
  }
}

/// Move-only, tracks how many of its instances are alive.
pub struct Resource {
  id: i64,
  alive: Rc<Cell<usize>>,
}

impl Resource {
  fn new(id: i64, alive: &Rc<Cell<usize>>) -> Self {
    alive.set(alive.get() + 1);

    Resource {
      id,
      alive: alive.clone(),
    }
  }
}

impl Drop for Resource {
  fn drop(&mut self) {
    self.alive.set(self.alive.get() - 1);
  }
}

impl Any for Holder<Resource> {
  fn print(&self) -> String {
    format!("resource #{}", self.object().id)
  }

  fn key(&self) -> Vec<i64> {
    vec![self.object().id]
  }

  fn bump(&mut self) {
    self.object_mut().id += 1;
  }
}

/// A container comparable through its interface only.
#[derive(Debug, Default)]
pub struct Comparable(AnyMovable<dyn Any>);

impl Comparable {
  fn new<T>(object: T) -> Self
  where
    T: 'static,
    Holder<T>: anymovable::Erase<dyn Any>,
  {
    Comparable(AnyMovable::new(object))
  }
}

impl PartialEq for Comparable {
  fn eq(&self, rhs: &Self) -> bool {
    match (self.0.get(), rhs.0.get()) {
      (Some(a), Some(b)) => a.key() == b.key(),
      (None, None) => true,
      _ => false,
    }
  }
}

#[test]
fn default_is_empty() {
  let x = AnyMovable::<dyn Any>::default();
  assert!(!x.is_defined());
}

#[test]
fn dispatch_matches_object() {
  let mut x = AnyMovable::<dyn Any>::new(42u8);
  assert!(x.is_defined());
  assert_eq!(x.print(), "data = 42");
  assert_eq!(x.key(), [42]);

  x = AnyMovable::new(String::from("123"));
  assert_eq!(x.print(), "data = 123");

  x.bump();
  assert_eq!(x.print(), "data = 123!");

  x = AnyMovable::new(-7i32);
  assert_eq!(x.print(), "data = -7");
}

#[test]
fn move_only_objects() {
  let alive = Rc::new(Cell::new(0));

  let mut x = AnyMovable::<dyn Any>::new(Resource::new(1, &alive));
  assert_eq!(alive.get(), 1);

  x.bump();
  assert_eq!(x.print(), "resource #2");

  let mut y = x.take();
  assert!(!x.is_defined());
  assert!(y.is_defined());
  assert_eq!(y.print(), "resource #2");
  assert_eq!(alive.get(), 1);

  y.emplace_with(|| Resource::new(10, &alive));
  assert_eq!(alive.get(), 1);
  assert_eq!(y.print(), "resource #10");

  y.clear();
  assert_eq!(alive.get(), 0);

  y.clear();
  assert_eq!(alive.get(), 0);
}

#[test]
fn emplace_over_another_type() {
  let alive = Rc::new(Cell::new(0));
  let mut x = AnyMovable::<dyn Any>::new(Resource::new(1, &alive));

  x.emplace::<String, _>("abc");

  assert_eq!(alive.get(), 0);
  assert_eq!(x.print(), "data = abc");
}

#[test]
fn drop_releases_object() {
  let alive = Rc::new(Cell::new(0));

  {
    let _x = AnyMovable::<dyn Any>::in_place_with(|| Resource::new(1, &alive));
    assert_eq!(alive.get(), 1);
  }

  assert_eq!(alive.get(), 0);
}

#[test]
fn array_round_trip() {
  let mut x = AnyMovable::<dyn Any>::new([3i64, 1, 4, 1, 5]);
  assert_eq!(x.key(), [3, 1, 4, 1, 5]);

  x.bump();
  assert_eq!(x.key(), [4, 2, 5, 2, 6]);

  let x = AnyMovable::<dyn Any>::from_elements::<i64, 3>((1..=3).rev()).expect("three elements");
  assert_eq!(x.print(), "data = [3, 2, 1]");
}

#[test]
fn equality_through_interface() {
  assert_eq!(Comparable::new(3u8), Comparable::new(3u8));
  assert_eq!(Comparable::new(3u8), Comparable::new(3i64));
  assert_eq!(Comparable::new(String::from("ab")), Comparable::new([97i64, 98]));
  assert_ne!(Comparable::new(3u8), Comparable::new(4u8));
  assert_ne!(Comparable::new(String::from("ab")), Comparable::new(String::from("ba")));
  assert_ne!(Comparable::new(1i64), Comparable::default());
  assert_eq!(Comparable::default(), Comparable::default());
}

#[test]
fn root_is_injected() {
  fn takes_root<R>(_: &R)
  where
    R: ?Sized + Root,
  {
  }

  let x = AnyMovable::<dyn Any>::new(1u8);
  takes_root::<dyn Any>(&*x);
}

mod reexport {
  pub use anymovable as erased;
}

#[interface(crate = reexport::erased)]
trait Double {
  fn double(&self) -> i64;
}

impl Double for Holder<i64> {
  fn double(&self) -> i64 {
    self.object() * 2
  }
}

#[test]
fn crate_path() {
  let x = AnyMovable::<dyn Double>::new(21i64);
  assert_eq!(x.double(), 42);
}

#[interface]
trait Shared: Send {
  fn count(&self) -> usize;
}

impl<T> Shared for Holder<Vec<T>>
where
  T: Send + 'static,
{
  fn count(&self) -> usize {
    self.object().len()
  }
}

#[test]
fn send_interfaces_cross_threads() {
  let x = AnyMovable::<dyn Shared>::new(vec!['a', 'b']);
  let len = std::thread::spawn(move || x.count()).join().expect("thread");

  assert_eq!(len, 2);
}
