mod tests {
    use tab5_led_panel::{
        TouchChannel, TouchEvent, TouchInput,
        channel::{TryReceiveError, TrySendError},
    };

    #[test]
    fn test_fifo_order() {
        let channel: TouchChannel<4> = TouchChannel::new();
        let sender = channel.sender();
        let receiver = channel.receiver();

        sender.try_send(TouchEvent::pressed(1, 1)).unwrap();
        sender.try_send(TouchEvent::held(2, 2)).unwrap();
        sender.try_send(TouchEvent::released(3, 3)).unwrap();
        assert_eq!(channel.len(), 3);

        assert_eq!(receiver.try_receive(), Ok(TouchEvent::pressed(1, 1)));
        assert_eq!(receiver.try_receive(), Ok(TouchEvent::held(2, 2)));
        assert_eq!(receiver.try_receive(), Ok(TouchEvent::released(3, 3)));
        assert_eq!(receiver.try_receive(), Err(TryReceiveError));
        assert!(channel.is_empty());
    }

    #[test]
    fn test_held_samples_coalesce() {
        let channel: TouchChannel<4> = TouchChannel::new();
        let sender = channel.sender();

        sender.try_send(TouchEvent::pressed(0, 0)).unwrap();
        for x in 1..=10 {
            sender.try_send(TouchEvent::held(x, 0)).unwrap();
        }
        assert_eq!(channel.len(), 2);

        sender.try_send(TouchEvent::released(10, 0)).unwrap();
        sender.try_send(TouchEvent::held(11, 0)).unwrap();
        assert_eq!(channel.len(), 4);

        let mut receiver = channel.receiver();
        assert_eq!(receiver.poll(), Some(TouchEvent::pressed(0, 0)));
        assert_eq!(receiver.poll(), Some(TouchEvent::held(10, 0)));
        assert_eq!(receiver.poll(), Some(TouchEvent::released(10, 0)));
        assert_eq!(receiver.poll(), Some(TouchEvent::held(11, 0)));
        assert_eq!(receiver.poll(), None);
    }

    #[test]
    fn test_full_channel_rejects_edges() {
        let channel: TouchChannel<2> = TouchChannel::new();
        let sender = channel.sender();

        sender.try_send(TouchEvent::pressed(0, 0)).unwrap();
        sender.try_send(TouchEvent::held(1, 0)).unwrap();

        // A move still fits by replacing the queued one
        assert!(sender.try_send(TouchEvent::held(2, 0)).is_ok());

        let released = TouchEvent::released(2, 0);
        assert_eq!(sender.try_send(released), Err(TrySendError(released)));
        assert_eq!(channel.len(), 2);
    }

    #[test]
    fn test_static_channel() {
        static CHANNEL: TouchChannel<8> = TouchChannel::new();
        CHANNEL.sender().try_send(TouchEvent::pressed(5, 6)).unwrap();
        let mut receiver = CHANNEL.receiver();
        assert_eq!(receiver.poll(), Some(TouchEvent::pressed(5, 6)));
    }
}
