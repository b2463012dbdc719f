mod subscriber;
mod subscriber_email;

pub use subscriber::Subscriber;
pub use subscriber_email::SubscriberEmail;
