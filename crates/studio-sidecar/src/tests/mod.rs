mod indicator;
mod listener_handle;
