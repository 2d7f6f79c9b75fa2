pub mod codec;
pub mod paths;
pub mod profile;
pub mod repository;
pub mod storage;

pub use codec::{Codec, YamlCodec};
pub use paths::AppPaths;
pub use profile::{ConfigSet, Credentials, Profile, ProfilePatch};
pub use repository::ConfigRepository;
pub use storage::{LocalFs, MemoryFs, Storage, StorageWriter};

pub type LocalRepository = ConfigRepository<LocalFs, YamlCodec>;

pub fn local_repository(paths: &AppPaths) -> LocalRepository {
    ConfigRepository::new(LocalFs, YamlCodec, paths.config_file())
}
