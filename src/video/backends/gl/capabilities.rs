use std::cmp;
use std::ffi;
use std::fmt;
use std::str::FromStr;

use gl::types::*;

use crate::errors::*;

/// Describes a version.
///
/// A version can only be compared to another version if they belong to the same API.
/// For example, both `Version::GL(3, 0) >= Version::ES(3, 0)` and `Version::ES(3, 0) >=
/// Version::GL(3, 0)` return `false`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Version {
    /// Regular OpenGL.
    GL(u8, u8),
    /// OpenGL embedded system.
    ES(u8, u8),
}

impl PartialOrd for Version {
    #[inline]
    fn partial_cmp(&self, other: &Version) -> Option<cmp::Ordering> {
        let (es1, major1, minor1) = match *self {
            Version::GL(major, minor) => (false, major, minor),
            Version::ES(major, minor) => (true, major, minor),
        };

        let (es2, major2, minor2) = match *other {
            Version::GL(major, minor) => (false, major, minor),
            Version::ES(major, minor) => (true, major, minor),
        };

        if es1 != es2 {
            None
        } else {
            match major1.cmp(&major2) {
                cmp::Ordering::Equal => Some(minor1.cmp(&minor2)),
                v => Some(v),
            }
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Version::GL(major, minor) => write!(f, "OpenGL {}.{}", major, minor),
            Version::ES(major, minor) => write!(f, "OpenGL ES {}.{}", major, minor),
        }
    }
}

impl FromStr for Version {
    type Err = Error;

    /// Parses the string returned by `glGetString(GL_VERSION)`, e.g. `"3.3.0 NVIDIA 390.77"`
    /// or `"OpenGL ES 3.0 Mesa 20.0.8"`.
    fn from_str(desc: &str) -> Result<Version> {
        let (es, desc) = if desc.starts_with("OpenGL ES-") {
            // "OpenGL ES-CM 1.1", "OpenGL ES-CL 1.1"
            (true, &desc[13..])
        } else if desc.starts_with("OpenGL ES ") {
            (true, &desc[10..])
        } else {
            (false, desc)
        };

        let malformed = || Error::Loader(format!("malformed version string {:?}.", desc));

        let number = desc.trim().split(' ').next().ok_or_else(malformed)?;
        let mut iter = number.split('.');
        let major = iter
            .next()
            .and_then(|v| v.parse().ok())
            .ok_or_else(malformed)?;
        let minor = iter
            .next()
            .and_then(|v| v.parse().ok())
            .ok_or_else(malformed)?;

        if es {
            Ok(Version::ES(major, minor))
        } else {
            Ok(Version::GL(major, minor))
        }
    }
}

/// What the current context reports about itself.
#[derive(Debug, Clone)]
pub struct Capabilities {
    pub version: Version,
    pub vendor: String,
    pub renderer: String,
}

impl Capabilities {
    /// Queries the current context.
    ///
    /// # Unsafe
    ///
    /// You must ensure that the functions belong to the current context, otherwise you will get
    /// an undefined behavior.
    pub unsafe fn parse() -> Result<Capabilities> {
        let version = Capabilities::parse_str(gl::VERSION)?.parse::<Version>()?;

        Ok(Capabilities {
            version,
            vendor: Capabilities::parse_str(gl::VENDOR)?,
            renderer: Capabilities::parse_str(gl::RENDERER)?,
        })
    }

    /// Vertex array objects and `#version 330 core` shaders need GL 3.3 or ES 3.0.
    pub fn check(&self) -> Result<()> {
        let supported = match self.version {
            Version::GL(..) => self.version >= Version::GL(3, 3),
            Version::ES(..) => self.version >= Version::ES(3, 0),
        };

        if !supported {
            return Err(Error::Loader(format!(
                "{} is too old, requires OpenGL 3.3 or OpenGL ES 3.0.",
                self.version
            )));
        }

        Ok(())
    }

    unsafe fn parse_str(id: GLenum) -> Result<String> {
        let s = gl::GetString(id);
        if s.is_null() {
            return Err(Error::Loader(format!("string of {:#x} is null.", id)));
        }

        Ok(ffi::CStr::from_ptr(s as *const _)
            .to_string_lossy()
            .into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse() {
        assert_eq!(
            "3.3.0 NVIDIA 390.77".parse::<Version>().unwrap(),
            Version::GL(3, 3)
        );
        assert_eq!(
            "4.6 (Core Profile) Mesa 20.0.8".parse::<Version>().unwrap(),
            Version::GL(4, 6)
        );
        assert_eq!(
            "OpenGL ES 3.0 Mesa 20.0.8".parse::<Version>().unwrap(),
            Version::ES(3, 0)
        );
        assert_eq!(
            "OpenGL ES-CM 1.1".parse::<Version>().unwrap(),
            Version::ES(1, 1)
        );

        assert!("".parse::<Version>().is_err());
        assert!("Mesa".parse::<Version>().is_err());
        assert!("4".parse::<Version>().is_err());
    }

    #[test]
    fn compare() {
        assert!(Version::GL(3, 3) >= Version::GL(3, 3));
        assert!(Version::GL(4, 1) > Version::GL(3, 3));
        assert!(Version::GL(3, 2) < Version::GL(3, 3));
        assert!(!(Version::GL(3, 0) >= Version::ES(3, 0)));
        assert!(!(Version::ES(3, 0) >= Version::GL(3, 0)));
    }

    fn caps(version: Version) -> Capabilities {
        Capabilities {
            version,
            vendor: "mock".into(),
            renderer: "mock".into(),
        }
    }

    #[test]
    fn check() {
        assert!(caps(Version::GL(3, 3)).check().is_ok());
        assert!(caps(Version::GL(4, 6)).check().is_ok());
        assert!(caps(Version::ES(3, 0)).check().is_ok());
        assert!(caps(Version::GL(3, 2)).check().is_err());
        assert!(caps(Version::GL(2, 1)).check().is_err());
        assert!(caps(Version::ES(2, 0)).check().is_err());
    }
}
