pub mod factory;
pub mod interface;
pub mod mock;
pub mod remote;

pub use factory::AudioClientFactory;
pub use interface::AudioClient;
pub use mock::MockAudioClient;
pub use remote::RemoteAudioClient;
