use failure::Fail;

#[derive(Debug, Fail)]
pub enum Error {
    #[fail(display = "Failed to create window. {}", _0)]
    WindowCreation(String),
    #[fail(display = "Glutin: {}", _0)]
    Context(String),
    #[fail(display = "Failed to initialize GL function loader. {}", _0)]
    Loader(String),
    #[fail(display = "Settings: {}", _0)]
    Settings(String),
    #[fail(display = "Backend: {}", _0)]
    Backend(String),
    #[fail(display = "Invalid mesh. {}", _0)]
    InvalidMesh(String),
    #[fail(display = "{} is invalid.", _0)]
    HandleInvalid(String),
}

pub type Result<T> = ::std::result::Result<T, Error>;

impl From<glutin::CreationError> for Error {
    fn from(err: glutin::CreationError) -> Error {
        Error::WindowCreation(format!("{}", err))
    }
}

impl From<glutin::ContextError> for Error {
    fn from(err: glutin::ContextError) -> Error {
        Error::Context(format!("{}", err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Error {
        Error::Settings(format!("{}", err))
    }
}

impl From<::std::io::Error> for Error {
    fn from(err: ::std::io::Error) -> Error {
        Error::Settings(format!("{}", err))
    }
}
