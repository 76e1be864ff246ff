pub mod audio_server;
