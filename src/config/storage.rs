use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::fs::{self, File, OpenOptions};
use std::io::{self, Cursor, Read, Write};
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// File access used by the config repository, keyed by path.
pub trait Storage {
    type Reader: Read;
    type Writer: StorageWriter;

    fn open(&self, path: &Path) -> io::Result<Self::Reader>;
    /// Opens an existing file for writing, discarding its contents.
    fn open_truncate(&self, path: &Path) -> io::Result<Self::Writer>;
    /// Creates the file, or truncates it if present. The parent directory must exist.
    fn create(&self, path: &Path) -> io::Result<Self::Writer>;
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;
}

pub trait StorageWriter: Write {
    /// Releases the handle, reporting any failure to persist what was written.
    fn close(self) -> io::Result<()>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl Storage for LocalFs {
    type Reader = File;
    type Writer = File;

    fn open(&self, path: &Path) -> io::Result<File> {
        File::open(path)
    }

    fn open_truncate(&self, path: &Path) -> io::Result<File> {
        OpenOptions::new().write(true).truncate(true).open(path)
    }

    fn create(&self, path: &Path) -> io::Result<File> {
        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);

        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;

            options.mode(0o600);
        }

        options.open(path)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        fs::create_dir_all(path)
    }
}

impl StorageWriter for File {
    fn close(mut self) -> io::Result<()> {
        self.flush()?;
        self.sync_all()
    }
}

/// In-memory [`Storage`]. Clones share the same tree, so a test can hand one
/// clone to a repository and inspect the other.
#[derive(Debug, Clone, Default)]
pub struct MemoryFs {
    tree: Rc<RefCell<MemoryTree>>,
}

#[derive(Debug, Default)]
struct MemoryTree {
    files: HashMap<PathBuf, Vec<u8>>,
    dirs: HashSet<PathBuf>,
    fail_close: bool,
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a file, creating its parent directories.
    pub fn with_file(self, path: impl Into<PathBuf>, contents: impl Into<Vec<u8>>) -> Self {
        let path = path.into();
        {
            let mut tree = self.tree.borrow_mut();
            if let Some(parent) = path.parent() {
                tree.add_dirs(parent);
            }
            tree.files.insert(path, contents.into());
        }
        self
    }

    pub fn read(&self, path: &Path) -> Option<Vec<u8>> {
        self.tree.borrow().files.get(path).cloned()
    }

    pub fn is_dir(&self, path: &Path) -> bool {
        self.tree.borrow().dirs.contains(path)
    }

    /// Makes every subsequent `close` fail after its data has been stored.
    pub fn fail_close(&self, fail: bool) {
        self.tree.borrow_mut().fail_close = fail;
    }
}

impl MemoryTree {
    fn add_dirs(&mut self, path: &Path) {
        for ancestor in path.ancestors() {
            if ancestor.as_os_str().is_empty() {
                break;
            }
            self.dirs.insert(ancestor.to_path_buf());
        }
    }

    fn parent_exists(&self, path: &Path) -> bool {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => self.dirs.contains(parent),
            _ => true,
        }
    }
}

impl Storage for MemoryFs {
    type Reader = Cursor<Vec<u8>>;
    type Writer = MemoryFile;

    fn open(&self, path: &Path) -> io::Result<Self::Reader> {
        self.read(path).map(Cursor::new).ok_or_else(|| not_found(path))
    }

    fn open_truncate(&self, path: &Path) -> io::Result<MemoryFile> {
        let mut tree = self.tree.borrow_mut();
        let contents = tree.files.get_mut(path).ok_or_else(|| not_found(path))?;
        contents.clear();
        Ok(MemoryFile::new(path, &self.tree))
    }

    fn create(&self, path: &Path) -> io::Result<MemoryFile> {
        let mut tree = self.tree.borrow_mut();
        if !tree.parent_exists(path) {
            return Err(not_found(path));
        }
        tree.files.insert(path.to_path_buf(), Vec::new());
        Ok(MemoryFile::new(path, &self.tree))
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        self.tree.borrow_mut().add_dirs(path);
        Ok(())
    }
}

/// Write handle into a [`MemoryFs`]. Bytes land in the tree on `close`.
#[derive(Debug)]
pub struct MemoryFile {
    path: PathBuf,
    buffer: Vec<u8>,
    tree: Rc<RefCell<MemoryTree>>,
}

impl MemoryFile {
    fn new(path: &Path, tree: &Rc<RefCell<MemoryTree>>) -> Self {
        Self {
            path: path.to_path_buf(),
            buffer: Vec::new(),
            tree: Rc::clone(tree),
        }
    }
}

impl Write for MemoryFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl StorageWriter for MemoryFile {
    fn close(self) -> io::Result<()> {
        let MemoryFile { path, buffer, tree } = self;
        let mut tree = tree.borrow_mut();
        tree.files.insert(path, buffer);
        if tree.fail_close {
            return Err(io::Error::other("simulated close failure"));
        }
        Ok(())
    }
}

fn not_found(path: &Path) -> io::Error {
    io::Error::new(
        io::ErrorKind::NotFound,
        format!("{} does not exist", path.display()),
    )
}
