mod cloudinary;

pub use self::cloudinary::CloudinaryGateway;
