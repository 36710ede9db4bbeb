pub mod bullet;
pub mod heading;

pub use bullet::Bullet;
pub use heading::Heading;
