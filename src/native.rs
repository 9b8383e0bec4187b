/// [`Syntax`](crate::Syntax) of the platform targeted during compilation
#[cfg(unix)]
pub type NativeSyntax = crate::unix::UnixSyntax;

/// [`Syntax`](crate::Syntax) of the platform targeted during compilation
#[cfg(windows)]
pub type NativeSyntax = crate::windows::WindowsSyntax;

/// [`FilePath`](crate::FilePath) using the syntax native to the platform during compilation
#[cfg(any(unix, windows))]
pub type NativeFilePath = crate::FilePath<NativeSyntax>;

/// [`DirectoryPath`](crate::DirectoryPath) using the syntax native to the platform during compilation
#[cfg(any(unix, windows))]
pub type NativeDirectoryPath = crate::DirectoryPath<NativeSyntax>;
